/*! Index-aligned gold/OCR sequences.

[Aligned] can only be built from sequences of equal length, and every operation on it keeps both sides aligned:
element `i` of [Aligned::ocr] is always the degraded counterpart of element `i` of [Aligned::gold].
!*/
use crate::error::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aligned {
    gold: Vec<String>,
    ocr: Vec<String>,
}

impl Aligned {
    /// Build from two sequences, failing if their lengths differ.
    pub fn new(gold: Vec<String>, ocr: Vec<String>) -> Result<Self, Error> {
        if gold.len() != ocr.len() {
            return Err(Error::Misaligned {
                gold: gold.len(),
                ocr: ocr.len(),
            });
        }
        Ok(Self { gold, ocr })
    }

    /// Append `other` at the end, keeping its order.
    pub fn extend(&mut self, other: Aligned) {
        self.gold.extend(other.gold);
        self.ocr.extend(other.ocr);
    }

    /// Keep only the pairs at `indices`, in that order.
    ///
    /// Indices must be in bounds and distinct.
    pub(crate) fn select(self, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut pairs: Vec<Option<(String, String)>> =
            self.gold.into_iter().zip(self.ocr).map(Some).collect();
        let (gold, ocr): (Vec<String>, Vec<String>) = indices
            .into_iter()
            .filter_map(|idx| pairs[idx].take())
            .unzip();
        Self { gold, ocr }
    }

    pub fn len(&self) -> usize {
        self.gold.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gold.is_empty()
    }

    pub fn gold(&self) -> &[String] {
        &self.gold
    }

    pub fn ocr(&self) -> &[String] {
        &self.ocr
    }

    /// Iterate over `(gold, ocr)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.gold
            .iter()
            .zip(self.ocr.iter())
            .map(|(g, o)| (g.as_str(), o.as_str()))
    }

    /// Maximum length in characters of gold and ocr sentences, respectively.
    ///
    /// Returns [None] when there is no pair.
    pub fn max_lengths(&self) -> Option<(usize, usize)> {
        let gold = self.gold.iter().map(|s| s.chars().count()).max()?;
        let ocr = self.ocr.iter().map(|s| s.chars().count()).max()?;
        Some((gold, ocr))
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.gold, self.ocr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rejects_misaligned() {
        let r = Aligned::new(strings(&["a", "b"]), strings(&["a"]));
        assert!(matches!(r, Err(Error::Misaligned { gold: 2, ocr: 1 })));
    }

    #[test]
    fn extend_keeps_order() {
        let mut a = Aligned::new(strings(&["a"]), strings(&["A"])).unwrap();
        let b = Aligned::new(strings(&["b", "c"]), strings(&["B", "C"])).unwrap();
        a.extend(b);
        assert_eq!(a.gold(), &strings(&["a", "b", "c"])[..]);
        assert_eq!(a.ocr(), &strings(&["A", "B", "C"])[..]);
        assert_eq!(a.len(), a.ocr().len());
    }

    #[test]
    fn max_lengths_count_chars() {
        let a = Aligned::new(strings(&["héllo", "ab"]), strings(&["h", "abcdef"])).unwrap();
        assert_eq!(a.max_lengths(), Some((5, 6)));
        assert_eq!(Aligned::default().max_lengths(), None);
    }

    #[test]
    fn select_keeps_pairs() {
        let a = Aligned::new(strings(&["a", "b", "c"]), strings(&["A", "B", "C"])).unwrap();
        let s = a.select(vec![2, 0]);
        let pairs: Vec<_> = s.pairs().collect();
        assert_eq!(pairs, vec![("c", "C"), ("a", "A")]);
    }
}
