use nom::error::Error;
use nom::error::ErrorKind;
use nom::IResult;

/// Split the first line from the input, without its line terminator.
pub fn line(input: &str) -> IResult<&str, &str> {
    let (line, rest) = match memchr::memchr(b'\n', input.as_bytes()) {
        None if input.is_empty() => {
            return Err(nom::Err::Error(Error::new(input, ErrorKind::Eof)));
        }
        None => (input, ""),
        Some(i) => (&input[..i], &input[i + 1..]),
    };
    Ok((rest, line.strip_suffix('\r').unwrap_or(line)))
}
