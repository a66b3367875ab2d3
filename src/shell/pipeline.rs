use crate::error::{ShellError, ShellResult};

use super::tokenizer::tokenize;

/// One command of a pipeline together with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub index: usize,
    pub args: Vec<String>,
}

impl Stage {
    pub fn new(index: usize, args: Vec<String>) -> Self {
        Self { index, args }
    }

    pub fn command(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Splits `line` on `|` and tokenizes every segment.
    ///
    /// A line without `|` is always a single stage, possibly empty. With two or
    /// more segments every one of them must hold a command, otherwise the line
    /// fails with [`ShellError::EmptyStage`]. A `|` inside quotes still splits.
    pub fn parse(line: &str) -> ShellResult<Self> {
        if !line.contains('|') {
            return Ok(Self {
                stages: vec![Stage::new(0, tokenize(line))],
            });
        }

        let stages = line
            .split('|')
            .enumerate()
            .map(|(index, segment)| {
                let args = tokenize(segment.trim_start());
                if args.is_empty() {
                    Err(ShellError::EmptyStage { index })
                } else {
                    Ok(Stage::new(index, args))
                }
            })
            .collect::<ShellResult<Vec<_>>>()?;

        tracing::debug!(stages = stages.len(), "parsed pipeline");
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn is_single(&self) -> bool {
        self.stages.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_single_stage_matches_tokenizer() {
        for line in ["ls -la", "echo \"a b\" c", "  cat  file ", "'unterminated"] {
            let pipeline = Pipeline::parse(line).unwrap();
            assert!(pipeline.is_single());
            assert_eq!(pipeline.stages()[0].args, tokenize(line));
        }
    }

    #[test]
    fn test_blank_line_is_single_empty_stage() {
        let pipeline = Pipeline::parse("   ").unwrap();
        assert!(pipeline.is_single());
        assert_eq!(pipeline.stages()[0].command(), None);
    }

    #[test]
    fn test_three_stages() {
        let pipeline = Pipeline::parse("cat f.txt | grep foo |wc -l").unwrap();
        let stages = pipeline.stages();
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0].args, vec!["cat", "f.txt"]);
        assert_eq!(stages[1].args, vec!["grep", "foo"]);
        assert_eq!(stages[2].args, vec!["wc", "-l"]);
        assert_eq!(
            stages.iter().map(|s| s.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_empty_middle_stage() {
        let err = Pipeline::parse("cmd1 | | cmd2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyStage);
        assert!(matches!(err, ShellError::EmptyStage { index: 1 }));
    }

    #[test]
    fn test_empty_leading_and_trailing_stage() {
        assert!(matches!(
            Pipeline::parse("| wc"),
            Err(ShellError::EmptyStage { index: 0 })
        ));
        assert!(matches!(
            Pipeline::parse("ls |"),
            Err(ShellError::EmptyStage { index: 1 })
        ));
    }

    #[test]
    fn test_pipe_inside_quotes_still_splits() {
        let pipeline = Pipeline::parse("echo 'a|b'").unwrap();
        assert_eq!(pipeline.stages().len(), 2);
        assert_eq!(pipeline.stages()[0].args, vec!["echo", "a"]);
        assert_eq!(pipeline.stages()[1].args, vec!["b'"]);
    }
}
