/// Swaps opening and closing parentheses: `(` becomes `)` and vice versa.
///
/// Text drawn right-to-left displays parentheses mirrored, but renderers that lay out glyphs
/// strictly left to right don't mirror them; swapping restores the intended shape.
pub fn swap_parentheses(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '(' => ')',
            ')' => '(',
            other => other,
        })
        .collect()
}
