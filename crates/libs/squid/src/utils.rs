use std::fmt::Write;

/// Writes a slice as `[a, b, c]`.
pub(crate) fn print_slice<A>(f: &mut std::fmt::Formatter<'_>, seq: &[A]) -> std::fmt::Result
where
    A: std::fmt::Display,
{
    f.write_char('[')?;
    for (i, x) in seq.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", x)?;
    }
    f.write_char(']')
}
