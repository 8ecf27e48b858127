//! Length-preserving masking rules shared by the built-in and custom patterns.
//!
//! Every function here replaces characters one-for-one with the mask
//! character, so a masked value occupies the same number of columns as the
//! original in a fixed-width terminal.
//!
//! License: MIT OR APACHE 2.0

/// How masked characters are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskStyle {
    pub mask_char: char,
    pub preserve_first_part: bool,
}

impl MaskStyle {
    pub fn new(mask_char: char, preserve_first_part: bool) -> Self {
        Self {
            mask_char,
            preserve_first_part,
        }
    }

    /// One mask character per character of `text`.
    pub fn cover(&self, text: &str) -> String {
        std::iter::repeat(self.mask_char)
            .take(text.chars().count())
            .collect()
    }
}

impl Default for MaskStyle {
    fn default() -> Self {
        Self::new('█', true)
    }
}

/// Masks a dot-separated version, honouring `preserve_first_part`.
///
/// `10.0.12345.6785` becomes `10.█.█████.████`, or `██.█.█████.████` when the
/// first part is not preserved.
pub fn mask_version(version: &str, style: &MaskStyle) -> String {
    mask_dotted(version, style, style.preserve_first_part)
}

/// Masks every dot-separated part, keeping part 0 only if `keep_first` is set.
pub fn mask_dotted(value: &str, style: &MaskStyle, keep_first: bool) -> String {
    value
        .split('.')
        .enumerate()
        .map(|(index, part)| {
            if index == 0 && keep_first {
                part.to_string()
            } else {
                style.cover(part)
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Masks an 8-4-4-4-12 UUID.
///
/// Groups 2, 4 and 5 are always masked. The version nibble leading group 3
/// stays visible and the rest of that group is masked. Group 1 stays visible
/// only for version 4 UUIDs.
///
/// Input that is not five hyphen-separated groups is returned unchanged.
pub fn mask_uuid(uuid: &str, style: &MaskStyle) -> String {
    let groups: Vec<&str> = uuid.split('-').collect();
    let [g1, g2, g3, g4, g5] = groups.as_slice() else {
        return uuid.to_string();
    };

    let mut g3_chars = g3.chars();
    let Some(version) = g3_chars.next() else {
        return uuid.to_string();
    };

    let first = if version == '4' {
        (*g1).to_string()
    } else {
        style.cover(g1)
    };

    format!(
        "{}-{}-{}{}-{}-{}",
        first,
        style.cover(g2),
        version,
        style.cover(g3_chars.as_str()),
        style.cover(g4),
        style.cover(g5),
    )
}

/// Masks every hex group of a MAC address, keeping the `:` or `-` separators.
pub fn mask_mac(mac: &str, style: &MaskStyle) -> String {
    mac.chars()
        .map(|c| if c == ':' || c == '-' { c } else { style.mask_char })
        .collect()
}

/// Masks the byte range `start..end` of `text`, leaving the rest untouched.
///
/// The range must lie on char boundaries, which is always the case for
/// offsets taken from regex captures.
pub fn mask_span(text: &str, start: usize, end: usize, style: &MaskStyle) -> String {
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.push_str(&style.cover(&text[start..end]));
    out.push_str(&text[end..]);
    out
}
