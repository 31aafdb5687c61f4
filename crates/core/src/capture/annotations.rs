use std::fs;
use std::path::Path;

use crate::capture::error::OpenError;
use crate::shared::bounding_box::BoundingBox;

/// Parses a whitespace-delimited annotation file into bounding boxes.
///
/// The format is a flat stream of `min_x min_y max_x max_y` quadruples with
/// no header and no separators beyond whitespace. Trailing whitespace and
/// newlines are tolerated; a trailing partial quadruple or a non-numeric
/// token is malformed.
pub fn parse_annotation_file(path: &Path) -> Result<Vec<BoundingBox>, OpenError> {
    let text = fs::read_to_string(path).map_err(|source| OpenError::ReadAnnotation {
        path: path.to_path_buf(),
        source,
    })?;
    parse_annotations(&text).map_err(|detail| OpenError::MalformedAnnotation {
        path: path.to_path_buf(),
        detail,
    })
}

fn parse_annotations(text: &str) -> Result<Vec<BoundingBox>, String> {
    let mut values = Vec::new();
    for token in text.split_whitespace() {
        let value: f64 = token
            .parse()
            .map_err(|_| format!("expected a number, found {token:?}"))?;
        values.push(value);
    }
    if values.len() % 4 != 0 {
        return Err(format!(
            "expected min_x min_y max_x max_y quadruples, found {} trailing value(s)",
            values.len() % 4
        ));
    }
    Ok(values
        .chunks_exact(4)
        .map(|q| BoundingBox::from_corners(q[0], q[1], q[2], q[3]))
        .collect())
}
