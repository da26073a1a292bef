use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use errors::*;

/// Split a document into AMRs. AMRs are separated by blank lines, lines starting with `#`
/// (metadata such as `# ::snt`) are dropped. Each AMR is returned on a single line.
pub fn split_amr_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(current.join(" "));
                current.clear();
            }
        } else if !line.starts_with('#') {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current.join(" "));
    }

    blocks
}

pub fn read_amr_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut text = String::new();
    BufReader::new(File::open(path).chain_err(|| format!("Cannot open AMR file {:?}", path))?)
        .read_to_string(&mut text)
        .chain_err(|| format!("Cannot read AMR file {:?}", path))?;

    let blocks = split_amr_blocks(&text);
    debug!("Read {} AMRs from {:?}", blocks.len(), path);
    Ok(blocks)
}
