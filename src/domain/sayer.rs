//! Chainable phrase builder.

/// Immutable accumulated phrase: `say("hi").and("there")` reads "hi there".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sayer {
    phrase: Option<String>,
}

/// Start a phrase with `word`.
pub fn say(word: &str) -> Sayer {
    Sayer {
        phrase: Some(word.to_string()),
    }
}

impl Sayer {
    /// A new sayer with `word` appended after a single space.
    ///
    /// On a sayer that has said nothing yet (`Sayer::default()`), `word`
    /// becomes the whole phrase with no leading space: `default().and("x")`
    /// reads `"x"`, not `" x"`. Use `say("")` to start from an empty word.
    pub fn and(&self, word: &str) -> Sayer {
        let phrase = match &self.phrase {
            Some(phrase) => format!("{} {}", phrase, word),
            None => word.to_string(),
        };
        Sayer {
            phrase: Some(phrase),
        }
    }

    pub fn phrase(&self) -> &str {
        self.phrase.as_deref().unwrap_or_default()
    }
}

impl std::fmt::Display for Sayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.phrase())
    }
}
