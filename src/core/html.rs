// src/core/html.rs
// Low-level HTML scanning helpers.
// Naive on purpose: they know tags, attributes and closing tags, nothing else.
// Tag names are matched ASCII case-insensitively.

use super::sanitize::{decode_entities, normalize_ws};

/// Which kind of table cell a block was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Header,
    Data,
}

/// A borrowed document plus its ASCII-lowercased copy.
///
/// ASCII lowercasing never changes byte lengths, so every offset found in
/// the lowercase copy indexes straight into the original text.
pub struct Html<'a> {
    src: &'a str,
    lc: String,
}

impl<'a> Html<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, lc: src.to_ascii_lowercase() }
    }

    /// Sub-document over `start..end` of this one.
    pub fn slice(&self, start: usize, end: usize) -> Html<'a> {
        Html { src: &self.src[start..end], lc: self.lc[start..end].to_string() }
    }

    /// Position of the next `<name` opener at or after `from`.
    /// `name` must be lowercase. The name has to end at whitespace, `/` or `>`,
    /// so `th` never matches `<thead>`.
    pub fn find_open(&self, name: &str, from: usize) -> Option<usize> {
        self.find_tag(&format!("<{name}"), from)
    }

    /// Position of the next `</name` closer at or after `from`, with the same
    /// name boundary as [`Html::find_open`], so `</th` skips `</thead>`.
    pub fn find_close(&self, name: &str, from: usize) -> Option<usize> {
        self.find_tag(&format!("</{name}"), from)
    }

    fn find_tag(&self, pat: &str, from: usize) -> Option<usize> {
        let bytes = self.lc.as_bytes();
        let mut pos = from;
        loop {
            let at = self.lc.get(pos..)?.find(pat)? + pos;
            let after = at + pat.len();
            match bytes.get(after) {
                Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => return Some(at),
                Some(_) => pos = after,
                None => return None,
            }
        }
    }

    /// Find the next complete `<name ...> ... </name>` block from `from` onwards.
    /// Returns `(start_of_opener, end_past_closer)`.
    pub fn next_block(&self, name: &str, from: usize) -> Option<(usize, usize)> {
        let start = self.find_open(name, from)?;
        let open_end = self.src[start..].find('>')? + start + 1;
        let close_at = self.find_close(name, open_end)?;
        let end = self.src[close_at..].find('>')? + close_at + 1;
        Some((start, end))
    }

    /// Next `<td>` or `<th>` block, whichever opens first.
    pub fn next_cell(&self, from: usize) -> Option<(CellKind, usize, usize)> {
        let td = self.next_block("td", from);
        let th = self.next_block("th", from);
        match (td, th) {
            (Some((ds, de)), Some((hs, _))) if ds < hs => Some((CellKind::Data, ds, de)),
            (_, Some((hs, he))) => Some((CellKind::Header, hs, he)),
            (Some((ds, de)), None) => Some((CellKind::Data, ds, de)),
            (None, None) => None,
        }
    }

    /// All cells of the row, in order, as visible text.
    pub fn cells(&self) -> Vec<(CellKind, String)> {
        let mut out = Vec::new();
        let mut pos = 0usize;
        while let Some((kind, s, e)) = self.next_cell(pos) {
            out.push((kind, cell_text(&self.src[s..e])));
            pos = e;
        }
        out
    }
}

/// Given a complete tag block like `<td nowrap>INNER</td>`,
/// return INNER (it may still hold nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return &block[open_end + 1..close_start];
            }
        }
    }
    ""
}

/// Remove all HTML tags `<...>` from the string.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Visible text of a cell block: tags stripped, then entities decoded,
/// then whitespace collapsed. Decoding last keeps `&lt;` from turning into a tag.
pub fn cell_text(block: &str) -> String {
    normalize_ws(&decode_entities(&strip_tags(inner_after_open_tag(block))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_tag_respects_name_boundary() {
        let h = Html::new("<thead><TH class=x>Srv</TH></thead>");
        assert_eq!(h.find_open("th", 0), Some(7));
        assert_eq!(h.find_open("table", 0), None);
    }

    #[test]
    fn blocks_are_case_insensitive() {
        let doc = "x <TABLE border=\"0\"><tr><td>a</td></tr></Table> y";
        let (s, e) = Html::new(doc).next_block("table", 0).unwrap();
        assert_eq!(&doc[s..e], "<TABLE border=\"0\"><tr><td>a</td></tr></Table>");
    }

    #[test]
    fn close_tag_respects_name_boundary() {
        let doc = "<table><thead><tr><th>Srv</thead></table>";
        let h = Html::new(doc);
        assert_eq!(h.find_close("th", 0), None);
        assert_eq!(h.next_block("th", 0), None);

        let doc = "<tr><TH>Srv</thead></TH></tr>";
        let h = Html::new(doc);
        let (s, e) = h.next_block("th", 0).unwrap();
        assert_eq!(&doc[s..e], "<TH>Srv</thead></TH>");
    }

    #[test]
    fn cells_keep_order_and_kind() {
        let h = Html::new("<tr><th>Srv</th><td><b>0-0</b></td><td nowrap>GET /?a=1&amp;b=2 HTTP/1.1</td></tr>");
        let cells = h.cells();
        assert_eq!(cells, vec![
            (CellKind::Header, "Srv".to_string()),
            (CellKind::Data, "0-0".to_string()),
            (CellKind::Data, "GET /?a=1&b=2 HTTP/1.1".to_string()),
        ]);
    }

    #[test]
    fn escaped_angle_brackets_survive_stripping() {
        assert_eq!(cell_text("<td>&lt;b&gt; not a tag</td>"), "<b> not a tag");
    }

    #[test]
    fn header_with_embedded_newline() {
        assert_eq!(cell_text("<th>CPU\n</th>"), "CPU");
    }

    #[test]
    fn empty_cell() {
        assert_eq!(cell_text("<td></td>"), "");
        assert_eq!(inner_after_open_tag("<td>"), "");
    }
}
