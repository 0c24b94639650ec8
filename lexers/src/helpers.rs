use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Drop any whitespace ahead along with whatever was already accepted.
    pub fn skip_whitespace(&mut self) -> bool {
        let skipped = self.skip_all(WHITE);
        self.ignore();
        skipped
    }

    // scan numbers like ([0-9]+(\.[0-9]+)?|\.[0-9]+)([eE][+-]?[0-9]+)?
    // None if there's no number ahead, Err(lexeme) if it starts like one
    // but doesn't finish (eg: '3.' or '2e+')
    pub fn scan_number(&mut self) -> Option<Result<String, String>> {
        let backtrack = self.pos();
        let integer = self.skip_all(DIGITS);
        if self.accept(&'.').is_some() {
            if !self.skip_all(DIGITS) {
                if !integer {
                    // a lone '.' isn't the start of a number
                    self.set_pos(backtrack);
                    return None;
                }
                return Some(Err(self.extract_string()));
            }
        } else if !integer {
            return None;
        }
        if self.accept_any(&['e', 'E']).is_some() {
            self.accept_any(&['+', '-']); // exponent sign is optional
            if !self.skip_all(DIGITS) {
                return Some(Err(self.extract_string()));
            }
        }
        Some(Ok(self.extract_string()))
    }

    // scan [a-zA-Z][a-zA-Z0-9]*
    pub fn scan_identifier(&mut self) -> Option<String> {
        let first = self.peek()?;
        if !first.is_ascii_alphabetic() {
            return None;
        }
        self.next();
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.next();
        }
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////
