/// One header/sequence pair from the input, trailing whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub header: String,
    pub sequence: String,
}

impl Record {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Header with its leading `@` swapped for `>`. Headers without the
    /// sentinel pass through untouched.
    pub fn fasta_header(&self) -> String {
        match self.header.strip_prefix('@') {
            Some(rest) => format!(">{}", rest),
            None => self.header.clone(),
        }
    }
}
