use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Parses one track's magnitude frames from CSV, one frame per line.
pub fn read_frames<R: BufRead>(reader: R) -> io::Result<Vec<Vec<f32>>> {
    let mut frames = Vec::new();
    let mut bins = None;

    for line_res in reader.lines() {
        let line = line_res?;
        if line.trim().is_empty() {
            continue;
        }

        let frame = line
            .split(',')
            .map(|field| {
                field.trim().parse::<f32>().map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidData, "Magnitude is not a valid float")
                })
            })
            .collect::<io::Result<Vec<f32>>>()?;

        match bins {
            None => bins = Some(frame.len()),
            Some(expected) if expected != frame.len() => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "Inconsistent frame length",
                ));
            }
            Some(_) => {}
        }

        frames.push(frame);
    }

    Ok(frames)
}

/// Track files in `dir`, sorted so repeated runs see the same order.
pub fn find_tracks(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

pub fn write_stats<W: Write>(writer: &mut W, mean: &[f32], std: &[f32]) -> io::Result<()> {
    writeln!(writer, "bin,mean,std")?; // Header

    for (bin, (m, s)) in mean.iter().zip(std.iter()).enumerate() {
        writeln!(writer, "{},{},{}", bin, m, s)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Cursor;

    #[test]
    fn test_read_frames() {
        let input = "1.0,2.0,3.0\n\n4.0, 5.0 ,6.0\n";
        let frames = read_frames(Cursor::new(input)).unwrap();

        assert_eq!(frames, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_read_frames_rejects_ragged_lines() {
        let input = "1.0,2.0,3.0\n4.0,5.0\n";
        let err = read_frames(Cursor::new(input)).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_read_frames_rejects_garbage() {
        let input = "1.0,oops,3.0\n";
        let err = read_frames(Cursor::new(input)).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_find_tracks_sorted_csv_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.csv", "a.csv", "notes.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let tracks = find_tracks(dir.path()).unwrap();
        let names: Vec<_> = tracks
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_write_stats() {
        let mut out = Vec::new();
        write_stats(&mut out, &[1.0, 2.0], &[0.5, 0.25]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "bin,mean,std\n0,1,0.5\n1,2,0.25\n");
    }
}
