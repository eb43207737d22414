#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum TokenType {
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Number,
    Symbol,
    String,
    Comment,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub ty: TokenType,
    pub lexeme: String,
    pub line: usize,
    pub col: usize,
}

#[derive(Debug)]
pub struct Error {
    pub what: String,
    pub line: usize,
    pub col: usize,
}

pub fn scan_tokens(input: &str) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::new(input);
    scanner.scan_tokens()?;
    Ok(scanner.tokens)
}

struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    col: usize,
    start_col: usize,
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_+-*/\\=<>!&%|".contains(c)
}

/// `-?([0-9]*\.)?[0-9]+([eE][+-]?[0-9]+)?`
pub fn is_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    let int_end = digits_from(i);
    let int_digits = int_end - i;
    i = int_end;
    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        if frac_end == i + 1 {
            return false;
        }
        i = frac_end;
    } else if int_digits == 0 {
        return false;
    }
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let exp_end = digits_from(i);
        if exp_end == i {
            return false;
        }
        i = exp_end;
    }
    i == bytes.len()
}

impl Scanner {
    fn new(input: &str) -> Scanner {
        Scanner {
            source: input.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            col: 0,
            start_col: 0,
        }
    }

    fn scan_tokens(&mut self) -> Result<(), Error> {
        while !self.done() {
            self.start = self.current;
            self.start_col = self.col + 1;
            self.scan_token()?;
        }
        Ok(())
    }

    fn scan_token(&mut self) -> Result<(), Error> {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ';' => {
                while self.peek() != '\n' && !self.done() {
                    self.advance();
                }
                self.add_token(TokenType::Comment)
            }
            '"' => self.string()?,
            ' ' | '\r' | '\t' | '\n' => {}
            c if is_symbol_char(c) || c == '.' => self.atom()?,
            c => {
                return Err(self.error(format!("unexpected character '{}'", c)));
            }
        }
        Ok(())
    }

    fn string(&mut self) -> Result<(), Error> {
        let (line, col) = (self.line, self.start_col);
        loop {
            if self.done() {
                return Err(Error {
                    what: "unterminated string".to_string(),
                    line,
                    col,
                });
            }
            match self.advance() {
                '"' => break,
                '\\' if !self.done() => {
                    self.advance();
                }
                _ => {}
            }
        }
        self.tokens.push(Token {
            ty: TokenType::String,
            lexeme: self.lexeme(),
            line,
            col,
        });
        Ok(())
    }

    fn atom(&mut self) -> Result<(), Error> {
        while is_symbol_char(self.peek()) || self.peek() == '.' {
            self.advance();
        }
        let lexeme = self.lexeme();
        if is_number(&lexeme) {
            self.add_token(TokenType::Number);
        } else if lexeme.contains('.') {
            return Err(self.error(format!("unexpected character '.' in '{}'", lexeme)));
        } else {
            self.add_token(TokenType::Symbol);
        }
        Ok(())
    }

    fn error(&self, what: String) -> Error {
        Error {
            what,
            line: self.line,
            col: self.start_col,
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, ty: TokenType) {
        self.tokens.push(Token {
            ty,
            lexeme: self.lexeme(),
            line: self.line,
            col: self.start_col,
        })
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        c
    }

    fn peek(&self) -> char {
        if self.done() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn done(&self) -> bool {
        self.current >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(input: &str) -> Vec<TokenType> {
        match scan_tokens(input) {
            Ok(tokens) => tokens.into_iter().map(|t| t.ty).collect(),
            Err(err) => panic!("{}", err.what),
        }
    }

    #[test]
    fn test_numbers() {
        for text in ["1", "-1", "0.5", ".5", "-2.25", "1e10", "1.5E-3"] {
            assert!(is_number(text), "{}", text);
        }
        for text in ["-", "1.", "e5", "1e", "--1", "1-", "x1"] {
            assert!(!is_number(text), "{}", text);
        }
    }

    #[test]
    fn test_atoms() {
        assert_eq!(
            types("(+ -1 x)"),
            vec![
                TokenType::LeftParen,
                TokenType::Symbol,
                TokenType::Number,
                TokenType::Symbol,
                TokenType::RightParen
            ]
        );
        assert_eq!(types("\\ & || <= !="), vec![TokenType::Symbol; 5]);
    }

    #[test]
    fn test_string_with_escaped_quote() {
        let tokens = match scan_tokens(r#""a \" b" c"#) {
            Ok(tokens) => tokens,
            Err(err) => panic!("{}", err.what),
        };
        assert_eq!(tokens[0].ty, TokenType::String);
        assert_eq!(tokens[0].lexeme, r#""a \" b""#);
        assert_eq!(tokens[1].ty, TokenType::Symbol);
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        assert_eq!(
            types("; hello (\n{}"),
            vec![TokenType::Comment, TokenType::LeftBrace, TokenType::RightBrace]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = match scan_tokens("a\n  bc") {
            Ok(tokens) => tokens,
            Err(err) => panic!("{}", err.what),
        };
        assert_eq!((tokens[1].line, tokens[1].col), (2, 3));
    }

    #[test]
    fn test_errors() {
        let err = scan_tokens("(print \"oops").err();
        assert!(matches!(err, Some(Error { ref what, line: 1, col: 8 }) if what == "unterminated string"));
        assert!(scan_tokens("a.b").is_err());
        assert!(scan_tokens("#").is_err());
    }
}
