//! Password sources

use crate::error::{GcmboxError, Result};
use std::io::{self, IsTerminal, Read, Write};
use zeroize::Zeroizing;

/// Trait for reading passwords from various sources
pub trait PassphraseReader {
    /// Read a password as arbitrary bytes (not necessarily UTF-8)
    ///
    /// Returns the password wrapped in `Zeroizing` to ensure it is securely
    /// wiped from memory when dropped.
    fn read_passphrase(&mut self) -> Result<Zeroizing<Vec<u8>>>;
}

/// Returns a fixed password (for testing)
pub struct ConstantPassphraseReader {
    passphrase: Zeroizing<Vec<u8>>,
}

impl ConstantPassphraseReader {
    pub fn new(passphrase: Vec<u8>) -> Self {
        Self {
            passphrase: Zeroizing::new(passphrase),
        }
    }
}

impl PassphraseReader for ConstantPassphraseReader {
    fn read_passphrase(&mut self) -> Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new((*self.passphrase).clone()))
    }
}

/// Reads the password from any io::Read source, byte for byte
pub struct ReaderPassphraseReader {
    reader: Box<dyn Read>,
}

impl ReaderPassphraseReader {
    pub fn new(reader: Box<dyn Read>) -> Self {
        Self { reader }
    }
}

impl PassphraseReader for ReaderPassphraseReader {
    fn read_passphrase(&mut self) -> Result<Zeroizing<Vec<u8>>> {
        let mut data = Zeroizing::new(Vec::new());
        self.reader.read_to_end(&mut data).map_err(|e| {
            GcmboxError::PassphraseUnavailable(format!("error reading password: {}", e))
        })?;
        Ok(data)
    }
}

/// Reads the password from the terminal with no echo
pub struct TerminalPassphraseReader {
    prompt: String,
}

impl TerminalPassphraseReader {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl Default for TerminalPassphraseReader {
    fn default() -> Self {
        Self::new("Password: ")
    }
}

impl PassphraseReader for TerminalPassphraseReader {
    /// Read password from terminal.
    ///
    /// Note: Terminal input is limited to UTF-8 due to rpassword library constraints.
    /// For non-UTF-8 passwords, use --passphrase-stdin instead.
    fn read_passphrase(&mut self) -> Result<Zeroizing<Vec<u8>>> {
        if !io::stdin().is_terminal() {
            return Err(GcmboxError::PassphraseUnavailable(
                "cannot read password from terminal - stdin is not a terminal".into(),
            ));
        }

        let mut stderr = io::stderr();
        stderr
            .write_all(self.prompt.as_bytes())
            .and_then(|()| stderr.flush())
            .map_err(|e| GcmboxError::io("failed to write password prompt", e))?;

        // rpassword hands back a plain String; move it straight into a
        // zeroizing buffer.
        let passphrase = rpassword::read_password().map_err(|e| {
            GcmboxError::PassphraseUnavailable(format!("failure reading password: {}", e))
        })?;

        Ok(Zeroizing::new(passphrase.into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_reader() {
        let mut reader = ConstantPassphraseReader::new(b"test123".to_vec());
        assert_eq!(&*reader.read_passphrase().unwrap(), b"test123");
        assert_eq!(&*reader.read_passphrase().unwrap(), b"test123");
    }

    /// Tests the terminal reader. This is ignored by default and must be run
    /// explicitly and with human input:
    ///
    /// cargo test test_terminal_reader_interactive -- --ignored --nocapture
    #[test]
    #[ignore]
    fn test_terminal_reader_interactive() {
        let mut reader = TerminalPassphraseReader::new("Please enter a test password: ");
        let passphrase = reader.read_passphrase().unwrap();
        println!("You entered: {}", String::from_utf8_lossy(&passphrase));
        assert!(!passphrase.is_empty(), "Expected non-empty password");
    }

    #[test]
    fn test_reader_passphrase_reader() {
        let data = b"mypassword";
        let mut reader = ReaderPassphraseReader::new(Box::new(&data[..]));
        assert_eq!(&*reader.read_passphrase().unwrap(), b"mypassword");
    }

    #[test]
    fn test_reader_passphrase_reader_empty() {
        let data = b"";
        let mut reader = ReaderPassphraseReader::new(Box::new(&data[..]));
        assert_eq!(&*reader.read_passphrase().unwrap(), b"");
    }

    /// Non-UTF-8 bytes pass through untouched, which is what makes
    /// --passphrase-stdin usable for arbitrary binary passwords.
    #[test]
    fn test_reader_passphrase_reader_non_utf8() {
        let data: &[u8] = &[0xff, 0xfe, 0x00, 0x01];
        let mut reader = ReaderPassphraseReader::new(Box::new(data));
        assert_eq!(&*reader.read_passphrase().unwrap(), data);
    }

    #[test]
    fn test_reader_passphrase_reader_error() {
        struct FailingRead;

        impl Read for FailingRead {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("simulated error"))
            }
        }

        let mut reader = ReaderPassphraseReader::new(Box::new(FailingRead));
        let err = reader.read_passphrase().expect_err("expected read failure");
        assert!(matches!(err, GcmboxError::PassphraseUnavailable(_)));
    }
}
