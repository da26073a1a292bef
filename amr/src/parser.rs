use std::fmt;
use regex::Regex;
use graph::{Graph, Node, Edge, Attribute};
use errors::*;

/// Lexical units of the PENMAN notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Open,
    Close,
    Slash,
    Role(&'a str),
    Quoted(&'a str),
    Symbol(&'a str),
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
            Token::Slash => write!(f, "/"),
            Token::Role(role) => write!(f, ":{}", role),
            Token::Quoted(s) => write!(f, "{}", s),
            Token::Symbol(s) => write!(f, "{}", s),
        }
    }
}

/// Parser of AMRs written in PENMAN notation, e.g:
///
/// ```text
/// (w / want-01 :ARG0 (b / boy) :ARG1 (g / go-01 :ARG0 b))
/// ```
///
/// A symbol in value position that names a variable defined anywhere in the graph becomes
/// an edge, any other symbol or quoted string becomes an attribute. Quotes are removed from
/// string values, and a backslash inside a string escapes the character that follows it
/// (`\"`, `\\`).
pub struct AmrParser {
    token_regex: Regex
}

struct ParseState<'a> {
    tokens: Vec<(usize, Token<'a>)>,
    cursor: usize,
    graph: Graph,
    // (relation, source node, symbol), resolved once all variables are known
    pending_values: Vec<(&'a str, usize, &'a str)>
}

impl AmrParser {
    pub fn new() -> AmrParser {
        AmrParser {
            token_regex: Regex::new(r#"\(|\)|/|:[^\s()"]*|"(?:[^"\\]|\\.)*"|"|[^\s()"/:][^\s()"/]*"#)
                .expect("Token pattern must be a valid regex")
        }
    }

    pub fn tokenize<'a>(&self, line: &'a str) -> Result<Vec<(usize, Token<'a>)>> {
        let mut tokens = Vec::new();
        for m in self.token_regex.find_iter(line) {
            let text = m.as_str();
            let token = match text {
                "(" => Token::Open,
                ")" => Token::Close,
                "/" => Token::Slash,
                "\"" => bail!(ErrorKind::UnterminatedString(m.start())),
                _ if text.starts_with(':') => Token::Role(&text[1..]),
                _ if text.starts_with('"') => Token::Quoted(text),
                _ => Token::Symbol(text),
            };
            tokens.push((m.start(), token));
        }

        Ok(tokens)
    }

    pub fn parse(&self, line: &str) -> Result<Graph> {
        let tokens = self.tokenize(line)?;
        if tokens.is_empty() {
            bail!(ErrorKind::EmptyInput);
        }

        let mut state = ParseState {
            graph: Graph::with_capacity(tokens.len() / 4 + 1, tokens.len() / 4 + 1),
            tokens,
            cursor: 0,
            pending_values: Vec::new()
        };

        state.parse_node()?;
        if let Some((position, token)) = state.next() {
            bail!(ErrorKind::TrailingInput(token.to_string(), position));
        }

        Ok(state.finish())
    }
}

/// Parse a single AMR, see `AmrParser`
pub fn parse_amr_line(line: &str) -> Result<Graph> {
    AmrParser::new().parse(line)
}

impl<'a> ParseState<'a> {
    fn next(&mut self) -> Option<(usize, Token<'a>)> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn peek(&self) -> Option<(usize, Token<'a>)> {
        self.tokens.get(self.cursor).cloned()
    }

    fn expect_symbol(&mut self, expected: &str) -> Result<&'a str> {
        match self.next() {
            Some((_, Token::Symbol(s))) => Ok(s),
            Some((position, token)) => bail!(ErrorKind::UnexpectedToken(token.to_string(), position, expected.to_owned())),
            None => bail!(ErrorKind::UnexpectedEnd(expected.to_owned()))
        }
    }

    /// Parse `( var / concept (:role value)* )` and return the id of the new node
    fn parse_node(&mut self) -> Result<usize> {
        match self.next() {
            Some((_, Token::Open)) => (),
            Some((position, token)) => bail!(ErrorKind::UnexpectedToken(token.to_string(), position, "`(`".to_owned())),
            None => bail!(ErrorKind::UnexpectedEnd("`(`".to_owned()))
        }

        let variable = self.expect_symbol("a variable")?;
        match self.next() {
            Some((_, Token::Slash)) => (),
            _ => bail!(ErrorKind::MissingConcept(variable.to_owned()))
        }
        let concept = match self.next() {
            Some((_, Token::Symbol(s))) => s.to_owned(),
            Some((_, Token::Quoted(s))) => unquote(s),
            Some((position, token)) => bail!(ErrorKind::UnexpectedToken(token.to_string(), position, "a concept".to_owned())),
            None => bail!(ErrorKind::UnexpectedEnd("a concept".to_owned()))
        };

        if self.graph.has_variable(variable) {
            bail!(ErrorKind::DuplicateVariable(variable.to_owned()));
        }
        let node_id = self.graph.add_node(Node::new(variable.to_owned(), concept));

        loop {
            match self.next() {
                Some((_, Token::Close)) => return Ok(node_id),
                Some((position, Token::Role(role))) => {
                    if role.is_empty() {
                        bail!(ErrorKind::UnexpectedToken(":".to_owned(), position, "a relation name".to_owned()));
                    }

                    match self.peek() {
                        Some((_, Token::Open)) => {
                            let child_id = self.parse_node()?;
                            self.graph.add_edge(Edge::new(role.to_owned(), node_id, child_id));
                        },
                        Some((_, Token::Symbol(s))) => {
                            self.cursor += 1;
                            self.pending_values.push((role, node_id, s));
                        },
                        Some((_, Token::Quoted(s))) => {
                            self.cursor += 1;
                            self.graph.add_attribute(Attribute::new(role.to_owned(), node_id, unquote(s)));
                        },
                        Some((position, token)) => bail!(ErrorKind::UnexpectedToken(token.to_string(), position, "a relation value".to_owned())),
                        None => bail!(ErrorKind::UnexpectedEnd("a relation value".to_owned()))
                    }
                },
                Some((position, token)) => bail!(ErrorKind::UnexpectedToken(token.to_string(), position, "a relation or `)`".to_owned())),
                None => bail!(ErrorKind::UnexpectedEnd("`)`".to_owned()))
            }
        }
    }

    /// Turn the symbols that were waiting for all variables to be defined into edges or attributes
    fn finish(mut self) -> Graph {
        for (role, source_id, symbol) in self.pending_values.drain(..) {
            let target_id = self.graph.get_node_by_variable(symbol).map(|n| n.id);
            match target_id {
                Some(target_id) => {
                    self.graph.add_edge(Edge::new(role.to_owned(), source_id, target_id));
                },
                None => {
                    self.graph.add_attribute(Attribute::new(role.to_owned(), source_id, symbol.to_owned()));
                }
            }
        }

        trace!("Parsed AMR: {}", self.graph);
        self.graph
    }
}

/// Strip the surrounding quotes of a string token and resolve its escaped characters
fn unquote(s: &str) -> String {
    let mut value = String::with_capacity(s.len() - 2);
    let mut chars = s[1..s.len() - 1].chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => value.push(escaped),
                None => value.push(c)
            },
            _ => value.push(c)
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph::Triple;

    #[test]
    pub fn test_parse_reentrant_graph() {
        let g = parse_amr_line("(w / want-01 :ARG0 (b / boy) :ARG1 (g / go-01 :ARG0 b))").unwrap();
        let (instances, attributes, relations) = g.get_triples();

        assert_eq!(instances.len(), 3);
        assert_eq!(attributes, vec![Triple::new("TOP", "w", "want-01")]);
        assert_eq!(relations, vec![
            Triple::new("ARG0", "w", "b"),
            Triple::new("ARG1", "w", "g"),
            Triple::new("ARG0", "g", "b"),
        ]);
    }

    #[test]
    pub fn test_parse_attributes() {
        let g = parse_amr_line(r#"(c / city :wiki "Paris" :name (n / name :op1 "Paris") :polarity - :quant 3)"#).unwrap();
        let (_, attributes, relations) = g.get_triples();

        assert_eq!(attributes, vec![
            Triple::new("TOP", "c", "city"),
            Triple::new("wiki", "c", "Paris"),
            Triple::new("polarity", "c", "-"),
            Triple::new("quant", "c", "3"),
            Triple::new("op1", "n", "Paris"),
        ]);
        assert_eq!(relations, vec![Triple::new("name", "c", "n")]);
    }

    #[test]
    pub fn test_parse_escaped_strings() {
        let g = parse_amr_line(r#"(n / name :op1 "a\"b" :op2 "c\\d" :op3 "e\f")"#).unwrap();
        let (_, attributes, _) = g.get_triples();
        assert_eq!(attributes, vec![
            Triple::new("TOP", "n", "name"),
            Triple::new("op1", "n", "a\"b"),
            Triple::new("op2", "n", "c\\d"),
            Triple::new("op3", "n", "ef"),
        ]);
        assert_eq!(unquote(r#""Paris""#), "Paris");
    }

    #[test]
    pub fn test_forward_reference() {
        // `g` is referenced before it is defined
        let g = parse_amr_line("(a / and :op1 (s / sing-01 :ARG0 g) :op2 (d / dance-01 :ARG0 (g / girl)))").unwrap();
        let (_, _, relations) = g.get_triples();
        assert!(relations.contains(&Triple::new("ARG0", "s", "g")));
        assert!(relations.contains(&Triple::new("ARG0", "d", "g")));
    }

    #[test]
    pub fn test_inverse_relation_is_kept_verbatim() {
        let g = parse_amr_line("(b / boy :ARG0-of (w / want-01))").unwrap();
        assert_eq!(g.get_triples().2, vec![Triple::new("ARG0-of", "b", "w")]);
    }

    #[test]
    pub fn test_parse_errors() {
        let parser = AmrParser::new();
        let kind = |line: &str| parser.parse(line).err().map(|e| e.0);

        match kind("") { Some(ErrorKind::EmptyInput) => (), x => panic!("{:?}", x) }
        match kind("(w / want-01 :ARG0 (b / boy)") { Some(ErrorKind::UnexpectedEnd(_)) => (), x => panic!("{:?}", x) }
        match kind("(w :ARG0 (b / boy))") { Some(ErrorKind::MissingConcept(ref v)) if v == "w" => (), x => panic!("{:?}", x) }
        match kind("(w / want-01 :ARG0 (w / boy))") { Some(ErrorKind::DuplicateVariable(ref v)) if v == "w" => (), x => panic!("{:?}", x) }
        match kind("(w / want-01) (b / boy)") { Some(ErrorKind::TrailingInput(ref t, 14)) if t == "(" => (), x => panic!("{:?}", x) }
        match kind(r#"(n / name :op1 "Paris)"#) { Some(ErrorKind::UnterminatedString(15)) => (), x => panic!("{:?}", x) }
        match kind("(w / want-01 : b)") { Some(ErrorKind::UnexpectedToken(..)) => (), x => panic!("{:?}", x) }
    }
}
