use generic_array::GenericArray;
use motifsynth::abc::Alphabet;
use motifsynth::abc::Dna;
use motifsynth::abc::Symbol;
use motifsynth::dense::DenseMatrix;
use motifsynth::err::InvalidData;
use nom::branch::alt;
use nom::character::complete::line_ending;
use nom::character::complete::space0;
use nom::character::complete::space1;
use nom::combinator::eof;
use nom::combinator::map;
use nom::multi::separated_list0;
use nom::number::complete::double;
use nom::sequence::delimited;
use nom::IResult;
use nom::Parser;

type Columns = GenericArray<Vec<f64>, <Dna as Alphabet>::K>;

pub fn frequencies(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(
        space0,
        separated_list0(space1, double),
        (space0, alt((line_ending, eof))),
    )
    .parse(input)
}

pub fn matrix(input: &str) -> IResult<&str, Columns> {
    map(
        (frequencies, frequencies, frequencies, frequencies),
        |(a, c, g, t)| GenericArray::from([a, c, g, t]),
    )
    .parse(input)
}

pub fn build_matrix(
    input: Columns,
    symbols: &[<Dna as Alphabet>::Symbol],
) -> Result<DenseMatrix<f64, <Dna as Alphabet>::K>, InvalidData> {
    let mut matrix = DenseMatrix::new(input[0].len());
    for (frequencies, s) in input.iter().zip(symbols) {
        if frequencies.len() != matrix.rows() {
            return Err(InvalidData);
        }
        for (i, x) in frequencies.iter().enumerate() {
            matrix[i][s.as_index()] = *x;
        }
    }
    Ok(matrix)
}
