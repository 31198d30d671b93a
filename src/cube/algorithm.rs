use super::metric::Metric;
use super::moves::Move;
use crate::Arbitrary;
use crate::SCRAMBLE_LENGTH;

/// An ordered sequence of moves: a scramble, a solution, or a slice of one.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
pub struct Algorithm(Vec<Move>);

impl Algorithm {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn push(&mut self, m: Move) {
        self.0.push(m);
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }
    pub fn moves(&self) -> &[Move] {
        &self.0
    }
    /// The sequence that undoes this one.
    pub fn inverse(&self) -> Self {
        Self(self.0.iter().rev().map(Move::inverse).collect())
    }
    /// Length under a metric.
    pub fn count(&self, metric: Metric) -> usize {
        self.0.iter().map(|m| m.cost(metric)).sum()
    }

    /// Split free text into move tokens.
    ///
    /// A token starts at a layer letter and swallows a trailing `w`, digits
    /// and primes. Whitespace, grouping brackets and `//` comments (to end
    /// of line) separate tokens; anything else is an error.
    fn tokens(s: &str) -> anyhow::Result<Vec<&str>> {
        let mut tokens = Vec::new();
        for line in s.lines() {
            let line = line.split("//").next().unwrap_or_default();
            let mut chars = line.char_indices().peekable();
            while let Some((start, c)) = chars.next() {
                match c {
                    c if c.is_whitespace() => continue,
                    '(' | ')' | '[' | ']' | '{' | '}' => continue,
                    'U' | 'R' | 'F' | 'D' | 'L' | 'B' | 'u' | 'r' | 'f' | 'd' | 'l' | 'b'
                    | 'M' | 'E' | 'S' | 'x' | 'y' | 'z' => {
                        let mut end = start + c.len_utf8();
                        while let Some((i, next)) = chars
                            .next_if(|(_, n)| *n == 'w' || *n == '\'' || *n == '’' || n.is_ascii_digit())
                        {
                            end = i + next.len_utf8();
                        }
                        tokens.push(&line[start..end]);
                    }
                    _ => return Err(anyhow::anyhow!("unexpected character '{}' in {}", c, line.trim())),
                }
            }
        }
        Ok(tokens)
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// free text, including formatted reconstructions with "// phase" comments
impl TryFrom<&str> for Algorithm {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::tokens(s)?
            .into_iter()
            .map(Move::try_from)
            .collect::<anyhow::Result<Vec<Move>>>()
            .map(Self)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let moves = self.0.iter().map(Move::to_string).collect::<Vec<_>>();
        write!(f, "{}", moves.join(" "))
    }
}

/// random-move scramble of outer face turns,
/// never turning the same axis twice in a row
impl Arbitrary for Algorithm {
    fn random() -> Self {
        let mut scramble = Self::empty();
        while scramble.len() < SCRAMBLE_LENGTH {
            let m = Move::random();
            match scramble.0.last() {
                Some(last) if last.axis() == m.axis() => continue,
                _ => scramble.push(m),
            }
        }
        scramble
    }
}
