use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum NoteError {
    WrongPassword,
    DecryptionFailure,
    MalformedInput(String),
}

impl fmt::Display for NoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteError::WrongPassword => write!(f, "wrong password"),
            NoteError::DecryptionFailure => {
                write!(f, "decryption failed: corrupted or tampered note data")
            }
            NoteError::MalformedInput(what) => write!(f, "malformed input: {what}"),
        }
    }
}

impl std::error::Error for NoteError {}
