#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    /// Discard the first field, the keyword of an OBJ statement (`v`, `vt`, `f`...).
    SkipKeyword,
    All,
}

/// Splits `line` on `delimiter` and converts up to `out.len()` fields with `parse`.
///
/// Consecutive delimiters produce an empty field, which is written as `sentinel` instead of
/// being parsed; a trailing delimiter does not produce a field. Returns the number of fields
/// written, or the first parse failure.
pub fn tokenize<'a, T, E>(
    line: &'a str,
    out: &mut [T],
    mode: FieldMode,
    delimiter: char,
    sentinel: T,
    mut parse: impl FnMut(&'a str) -> Result<T, E>,
) -> Result<usize, E>
where
    T: Clone,
{
    let mut fields = line.split_terminator(delimiter);
    if mode == FieldMode::SkipKeyword {
        fields.next();
    }

    let mut count = 0;
    for (slot, field) in out.iter_mut().zip(fields) {
        *slot = if field.is_empty() {
            sentinel.clone()
        } else {
            parse(field)?
        };
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod test {
    use std::convert::Infallible;

    use super::*;

    #[test]
    fn skips_keyword_and_parses_numbers() {
        let mut values = [0.; 3];
        let count = tokenize(
            "v 1.5 -2 3e2",
            &mut values,
            FieldMode::SkipKeyword,
            ' ',
            0.,
            str::parse::<f64>,
        )
        .unwrap();
        assert_eq!(count, 3);
        assert_eq!(values, [1.5, -2., 300.]);
    }

    #[test]
    fn empty_fields_become_the_sentinel() {
        let mut indices = [7u32; 3];
        let count =
            tokenize("4//9", &mut indices, FieldMode::All, '/', 0, str::parse::<u32>).unwrap();
        assert_eq!(count, 3);
        assert_eq!(indices, [4, 0, 9]);
    }

    #[test]
    fn stops_at_the_output_capacity() {
        let mut indices = [0u32; 3];
        let count =
            tokenize("1/2/3/4", &mut indices, FieldMode::All, '/', 0, str::parse::<u32>).unwrap();
        assert_eq!(count, 3);
        assert_eq!(indices, [1, 2, 3]);
    }

    #[test]
    fn trailing_delimiter_adds_no_field() {
        let mut indices = [0u32; 3];
        let count =
            tokenize("5/", &mut indices, FieldMode::All, '/', 0, str::parse::<u32>).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn keyword_only_line_has_no_fields() {
        let mut values = [0.; 3];
        let count =
            tokenize("vn", &mut values, FieldMode::SkipKeyword, ' ', 0., str::parse::<f64>)
                .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn non_numeric_field_is_an_error() {
        let mut values = [0.; 3];
        let result = tokenize(
            "v 1 two 3",
            &mut values,
            FieldMode::SkipKeyword,
            ' ',
            0.,
            str::parse::<f64>,
        );
        assert!(result.is_err());
    }

    #[test]
    fn string_fields_are_borrowed() {
        let mut corners = [""; 4];
        let count = tokenize(
            "f 1/1 2/2 3/3",
            &mut corners,
            FieldMode::SkipKeyword,
            ' ',
            "",
            Ok::<_, Infallible>,
        )
        .unwrap();
        assert_eq!(count, 3);
        assert_eq!(corners, ["1/1", "2/2", "3/3", ""]);
    }
}
