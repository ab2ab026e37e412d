use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::trace;
use thiserror::Error;

use crate::array::Array2D;
use crate::dims::Dims;
use crate::gameboard::{check_size, Maze, MazeError};

/// Text format for mazes: a `"<rows> <columns>"` header, `rows` lines of
/// space-separated 0/1 right-wall flags, one blank line, then `rows` lines
/// of bottom-wall flags.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("missing size header")]
    MissingHeader,
    #[error("malformed size header: {0:?}")]
    MalformedHeader(String),
    #[error(transparent)]
    InvalidSize(#[from] MazeError),
    #[error("expected {expected} rows in the matrix, found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("expected {expected} columns on line {line}, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid wall flag {token:?} on line {line}")]
    InvalidFlag { line: usize, token: String },
}

pub fn save<W: Write>(maze: &Maze, mut writer: W) -> io::Result<()> {
    let Dims(columns, rows) = maze.size();

    writeln!(writer, "{} {}", rows, columns)?;
    write_matrix(&mut writer, maze.right_walls())?;
    writeln!(writer)?;
    write_matrix(&mut writer, maze.bottom_walls())?;

    Ok(())
}

pub fn save_to_file<P: AsRef<Path>>(maze: &Maze, path: P) -> io::Result<()> {
    save(maze, BufWriter::new(File::create(path)?))
}

pub fn load<R: BufRead>(reader: R) -> Result<Maze, ParseError> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(ParseError::MissingHeader)??;
    let fields: Vec<_> = header.split_whitespace().collect();
    let [rows, columns] = fields[..] else {
        return Err(ParseError::MalformedHeader(header));
    };
    let (Ok(rows), Ok(columns)) = (rows.parse::<i32>(), columns.parse::<i32>()) else {
        return Err(ParseError::MalformedHeader(header));
    };
    check_size(rows)?;
    check_size(columns)?;

    trace!("loading {}x{} maze", columns, rows);

    let size = Dims(columns, rows);
    let right_walls = read_matrix(&mut lines, size, 2)?;
    // the blank separator line; anything past the declared matrices is
    // ignored, so its content is not validated
    lines.next().transpose()?;
    let bottom_walls = read_matrix(&mut lines, size, 3 + rows as usize)?;

    Ok(Maze::new(size, right_walls, bottom_walls)?)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Maze, ParseError> {
    load(BufReader::new(File::open(path)?))
}

fn write_matrix<W: Write>(writer: &mut W, matrix: &Array2D<bool>) -> io::Result<()> {
    let Dims(width, height) = matrix.size();

    for row in 0..height {
        for col in 0..width {
            if col > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{}", matrix[Dims(col, row)] as u8)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn read_matrix(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    size: Dims,
    first_line: usize,
) -> Result<Array2D<bool>, ParseError> {
    let (width, height) = (size.0 as usize, size.1 as usize);
    let mut matrix = Array2D::new(false, width, height);

    for row in 0..height {
        let line = lines
            .next()
            .ok_or(ParseError::MissingRows {
                expected: height,
                found: row,
            })??;

        let flags: Vec<_> = line.split_whitespace().collect();
        if flags.len() != width {
            return Err(ParseError::ColumnCount {
                line: first_line + row,
                expected: width,
                found: flags.len(),
            });
        }

        for (col, token) in flags.into_iter().enumerate() {
            matrix[Dims(col as i32, row as i32)] = match token {
                "0" => false,
                "1" => true,
                _ => {
                    return Err(ParseError::InvalidFlag {
                        line: first_line + row,
                        token: token.to_string(),
                    })
                }
            };
        }
    }

    Ok(matrix)
}
