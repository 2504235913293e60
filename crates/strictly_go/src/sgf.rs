//! SGF codec for strictly alternating games without setup stones.
//!
//! Records are `FF[4]` game trees. Only the main line is read: the first
//! variation at every branch. Point values are two lowercase letters,
//! `'a' + x` then `'a' + y`; an empty value is a pass.

use super::error::SgfError;
use super::game::{DEFAULT_KOMI, Game};
use super::types::{Move, Vertex};
use tracing::{debug, instrument, warn};

const HEADER: &str = "(;FF[4]";
const DEFAULT_BOARD_SIZE: usize = 19;
const MAX_BOARD_SIZE: usize = 26;
const MAX_VARIATION_DEPTH: usize = 512;
const SETUP_PROPERTIES: [&str; 3] = ["AB", "AW", "AE"];

/// Options for loading a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgfOptions {
    /// Replay moves through the legality check.
    pub check_legal: bool,
    /// Komi used when the root node has no `KM`.
    pub default_komi: f64,
}

impl Default for SgfOptions {
    fn default() -> Self {
        Self {
            check_legal: true,
            default_komi: DEFAULT_KOMI,
        }
    }
}

/// One `IDENT[value]...` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Upper-case identifier, e.g. `SZ`.
    pub ident: String,
    /// Unescaped values.
    pub values: Vec<String>,
}

/// Properties of one `;` node.
pub type Node = Vec<Property>;

// ─────────────────────────────────────────────────────────────
//  Writer
// ─────────────────────────────────────────────────────────────

/// Serializes `game` as a single-line-header FF[4] record.
///
/// # Errors
///
/// Returns [`SgfError::InvalidProperty`] for `SZ` when the board is larger
/// than the 26 single-letter coordinates can address.
#[instrument(skip(game), fields(board_size = game.board_size(), moves = game.moves().len()))]
pub fn write(game: &Game, comment: Option<&str>) -> Result<String, SgfError> {
    let board_size = game.board_size();
    if !(1..=MAX_BOARD_SIZE).contains(&board_size) {
        warn!(board_size, "Board size has no SGF coordinates");
        return Err(invalid("SZ", &board_size.to_string()));
    }

    let mut out = format!("{HEADER}SZ[{board_size}]RU[NZ]KM[{}]", game.komi());
    if let Some(comment) = comment.filter(|c| !c.is_empty()) {
        out.push_str("C[");
        out.push_str(&escape(comment));
        out.push(']');
    }
    out.push_str("\n;");

    let body: Vec<String> = game
        .moves()
        .iter()
        .enumerate()
        .map(|(turn, mv)| {
            let player = if turn % 2 == 0 { "B" } else { "W" };
            match mv {
                Move::Pass => format!("{player}[]"),
                Move::Vertex(v) => format!("{player}[{}{}]", point_letter(v.x), point_letter(v.y)),
            }
        })
        .collect();
    out.push_str(&body.join(";"));
    out.push(')');
    Ok(out)
}

/// Letter for an on-board coordinate; callers have checked `coord < 26`.
fn point_letter(coord: usize) -> char {
    char::from(b'a' + coord as u8)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, ']' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// ─────────────────────────────────────────────────────────────
//  Reader
// ─────────────────────────────────────────────────────────────

/// Parses `text` and replays its moves into a new [`Game`].
///
/// # Errors
///
/// Returns [`SgfError`] when the header is not `FF[4]`, the tree is malformed,
/// `SZ`/`KM` cannot be read, colors do not alternate from Black, a move
/// value is malformed, setup stones are present, or a replayed move is
/// rejected.
#[instrument(skip(text), fields(len = text.len()))]
pub fn read(text: &str, options: SgfOptions) -> Result<Game, SgfError> {
    let text = text.trim();
    if !text.starts_with(HEADER) {
        warn!("Rejected SGF without FF[4] header");
        return Err(SgfError::UnsupportedFormat);
    }

    let nodes = parse(text)?;
    let root = nodes.first().map(Vec::as_slice).unwrap_or_default();

    let board_size = match root_value(root, "SZ") {
        None => DEFAULT_BOARD_SIZE,
        Some(value) => value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=MAX_BOARD_SIZE).contains(n))
            .ok_or_else(|| invalid("SZ", value))?,
    };
    let komi = match root_value(root, "KM") {
        None => options.default_komi,
        Some(value) => value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|k| k.is_finite())
            .ok_or_else(|| invalid("KM", value))?,
    };

    let mut game = Game::new(board_size, komi);
    for prop in nodes.iter().flatten() {
        if SETUP_PROPERTIES.contains(&prop.ident.as_str()) {
            warn!(property = %prop.ident, "Rejected SGF with setup stones");
            return Err(SgfError::SetupStonesUnsupported(prop.ident.clone()));
        }
        let found = match prop.ident.as_str() {
            "B" => "B",
            "W" => "W",
            _ => continue,
        };

        let turn = game.moves().len();
        let expected = if turn % 2 == 0 { "B" } else { "W" };
        if found != expected {
            warn!(turn, expected, found, "Rejected SGF with non-alternating colors");
            return Err(SgfError::UnexpectedColor {
                turn,
                expected,
                found,
            });
        }

        let mv = match prop.values.as_slice() {
            [value] => parse_move(turn, value)?,
            _ => {
                return Err(SgfError::MalformedVertex {
                    turn,
                    value: prop.values.join("]["),
                });
            }
        };

        if options.check_legal {
            game.play_move(mv)?;
        } else {
            game.play_move_unchecked(mv)?;
        }
    }

    debug!(board_size, komi, moves = game.moves().len(), "Loaded SGF");
    Ok(game)
}

fn root_value<'a>(root: &'a [Property], ident: &str) -> Option<&'a str> {
    root.iter()
        .find(|p| p.ident == ident)
        .and_then(|p| p.values.first())
        .map(String::as_str)
}

fn invalid(name: &str, value: &str) -> SgfError {
    SgfError::InvalidProperty {
        name: name.to_string(),
        value: value.to_string(),
    }
}

/// Decodes a move value: empty for a pass, else two lowercase letters.
fn parse_move(turn: usize, value: &str) -> Result<Move, SgfError> {
    match value.as_bytes() {
        [] => Ok(Move::Pass),
        [x @ b'a'..=b'z', y @ b'a'..=b'z'] => Ok(Move::Vertex(Vertex::new(
            usize::from(x - b'a'),
            usize::from(y - b'a'),
        ))),
        _ => Err(SgfError::MalformedVertex {
            turn,
            value: value.to_string(),
        }),
    }
}

// ─────────────────────────────────────────────────────────────
//  Tokenizer
// ─────────────────────────────────────────────────────────────

/// Parses the first game tree of a collection and returns its main line.
///
/// # Errors
///
/// Returns [`SgfError::Syntax`] with the byte offset of the problem.
pub fn parse(text: &str) -> Result<Vec<Node>, SgfError> {
    let mut parser = Parser { text, pos: 0 };
    parser.skip_whitespace();
    parser.game_tree(0)
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn error(&self, message: impl Into<String>) -> SgfError {
        SgfError::Syntax {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn expect(&mut self, want: char) -> Result<(), SgfError> {
        match self.peek() {
            Some(c) if c == want => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{want}', found '{c}'"))),
            None => Err(self.error(format!("expected '{want}', found end of input"))),
        }
    }

    fn game_tree(&mut self, depth: usize) -> Result<Vec<Node>, SgfError> {
        if depth >= MAX_VARIATION_DEPTH {
            return Err(self.error("variations nested too deeply"));
        }
        self.expect('(')?;
        self.skip_whitespace();

        let mut nodes = Vec::new();
        while self.peek() == Some(';') {
            nodes.push(self.node()?);
        }
        if nodes.is_empty() {
            return Err(self.error("game tree has no nodes"));
        }

        let mut first_variation = true;
        while self.peek() == Some('(') {
            let variation = self.game_tree(depth + 1)?;
            if first_variation {
                nodes.extend(variation);
                first_variation = false;
            }
            self.skip_whitespace();
        }

        self.expect(')')?;
        self.skip_whitespace();
        Ok(nodes)
    }

    fn node(&mut self) -> Result<Node, SgfError> {
        self.expect(';')?;
        self.skip_whitespace();
        let mut props = Vec::new();
        while self.peek().is_some_and(|c| c.is_ascii_uppercase()) {
            props.push(self.property()?);
        }
        Ok(props)
    }

    fn property(&mut self) -> Result<Property, SgfError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_uppercase()) {
            self.bump();
        }
        let ident = self.text[start..self.pos].to_string();
        self.skip_whitespace();

        let mut values = Vec::new();
        while self.peek() == Some('[') {
            values.push(self.value()?);
            self.skip_whitespace();
        }
        if values.is_empty() {
            return Err(self.error(format!("property {ident} has no value")));
        }
        Ok(Property { ident, values })
    }

    fn value(&mut self) -> Result<String, SgfError> {
        self.expect('[')?;
        let mut out = String::new();
        loop {
            match self.bump() {
                Some(']') => return Ok(out),
                Some('\\') => match self.bump() {
                    // Soft line break.
                    Some('\n') => {}
                    Some(c) => out.push(c),
                    None => return Err(self.error("unterminated property value")),
                },
                Some(c) => out.push(c),
                None => return Err(self.error("unterminated property value")),
            }
        }
    }
}
