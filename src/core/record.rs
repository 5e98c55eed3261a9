use noodles::fasta;

/// A single scaffold as read from an assembly file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Sequence identifier (definition name, without description)
    pub id: String,

    /// Nucleotide sequence, case preserved
    pub sequence: Vec<u8>,
}

impl Record {
    pub fn new(id: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl From<fasta::Record> for Record {
    fn from(record: fasta::Record) -> Self {
        let id = String::from_utf8_lossy(record.name()).to_string();
        let sequence = record.sequence().as_ref().to_vec();
        Self { id, sequence }
    }
}
