use std::borrow::Cow;

/// A plaintext paired with its computed digest.
///
/// Plaintexts are raw line bytes: a wordlist line is a candidate whatever its
/// encoding. Bulk workers borrow them from the loaded wordlist; the streaming
/// hashing stage owns them. Either way a candidate is moved, never shared, and
/// dropped right after its equality check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    plaintext: Cow<'a, [u8]>,
    digest: String,
}

impl<'a> Candidate<'a> {
    pub fn new(plaintext: impl Into<Cow<'a, [u8]>>, digest: String) -> Self {
        Self { plaintext: plaintext.into(), digest }
    }

    pub fn plaintext(&self) -> &[u8] {
        &self.plaintext
    }

    /// Plaintext for display, with invalid UTF-8 replaced.
    pub fn plaintext_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.plaintext)
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Exact, case-sensitive comparison against the target digest.
    #[inline]
    pub fn matches(&self, target: &str) -> bool {
        self.digest == target
    }

    pub fn into_plaintext(self) -> Vec<u8> {
        self.plaintext.into_owned()
    }
}

/// Terminal result of one recovery.
///
/// A found plaintext keeps the exact bytes of the matching line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Vec<u8>),
    NotFound,
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn plaintext(&self) -> Option<&[u8]> {
        match self {
            Outcome::Found(plaintext) => Some(plaintext),
            Outcome::NotFound => None,
        }
    }

    /// Found plaintext for display, with invalid UTF-8 replaced.
    pub fn plaintext_lossy(&self) -> Option<Cow<'_, str>> {
        self.plaintext().map(String::from_utf8_lossy)
    }

    pub fn into_plaintext(self) -> Option<Vec<u8>> {
        match self {
            Outcome::Found(plaintext) => Some(plaintext),
            Outcome::NotFound => None,
        }
    }
}
