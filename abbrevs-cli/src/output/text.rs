//! Plain text output formatter

use super::OutputFormatter;
use abbrevs_core::{TokenList, Tokens};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one entry per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_list(&mut self, list: &TokenList) -> Result<()> {
        for entry in list {
            writeln!(self.writer, "{}", entry.variants().join(" | "))?;
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_tokens(&mut self, tokens: &Tokens) -> Result<()> {
        match tokens {
            Tokens::Language(list) => self.write_list(list)?,
            Tokens::All(all) => {
                for (index, (code, list)) in all.iter().enumerate() {
                    if index > 0 {
                        writeln!(self.writer)?;
                    }
                    writeln!(self.writer, "[{code}]")?;
                    self.write_list(list)?;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abbrevs_core::{LanguageCode, TokenEntry};
    use std::collections::BTreeMap;

    #[test]
    fn test_single_language() {
        let tokens = Tokens::Language(TokenList::new(vec![
            TokenEntry::new(["Street", "St", "Str"]).unwrap(),
            TokenEntry::singleton("Alley"),
        ]));

        let mut buffer = Vec::new();
        TextFormatter::new(&mut buffer).write_tokens(&tokens).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Street | St | Str\nAlley\n"
        );
    }

    #[test]
    fn test_all_languages_have_headers() {
        let mut all = BTreeMap::new();
        all.insert(
            LanguageCode::new("fr").unwrap(),
            TokenList::new(vec![TokenEntry::new(["Avenue", "Av"]).unwrap()]),
        );
        all.insert(LanguageCode::new("de").unwrap(), TokenList::default());

        let mut buffer = Vec::new();
        TextFormatter::new(&mut buffer)
            .write_tokens(&Tokens::All(all))
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "[de]\n\n[fr]\nAvenue | Av\n"
        );
    }
}
