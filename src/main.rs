use ksh::core::config::Config;
use ksh::error::ShellResult;
use ksh::flags::Flags;
use ksh::shell::Shell;

fn run(flags: &Flags) -> ShellResult<i32> {
    let config = Config::load(flags.config.as_deref())?;
    let mut shell = Shell::new(flags, config)?;
    shell.run()
}

fn main() {
    let flags: Flags = argh::from_env();

    if flags.version {
        println!("ksh {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    ksh::logging::init(flags.debug);

    match run(&flags) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("ksh: {}", e);
            std::process::exit(1);
        }
    }
}
