use std::path::PathBuf;

use crate::shared::intrinsics::IntrinsicsHint;

/// Source description assembled from a flat argument list.
#[derive(Clone, Debug, Default)]
pub struct SourceOptions {
    pub image_files: Vec<PathBuf>,
    pub directory: Option<PathBuf>,
    pub bbox_directory: Option<PathBuf>,
    pub intrinsics: IntrinsicsHint,
}

impl SourceOptions {
    /// Parses the source-related flags out of `arguments`, removing every
    /// token pair it consumed so the remainder can be handed to another
    /// parser.
    ///
    /// `-root`/`-inroot` and the intrinsics flags are recognized but left
    /// in the list; the same tokens may matter to downstream consumers.
    /// `-root` is scanned in a prior pass, so it applies to every path
    /// regardless of flag order, and the last occurrence wins.
    pub fn parse(arguments: &mut Vec<String>) -> Self {
        let tokens = std::mem::take(arguments);
        let mut consumed = vec![false; tokens.len()];
        let mut options = SourceOptions::default();

        let root = scan_root(&tokens);

        let mut i = 0;
        while i < tokens.len() {
            match tokens[i].as_str() {
                "-f" => {
                    if let Some(value) = tokens.get(i + 1) {
                        options.image_files.push(prefixed(root.as_deref(), value));
                        consumed[i] = true;
                        consumed[i + 1] = true;
                        i += 1;
                    } else {
                        log::warn!("-f expects a file path, none given");
                    }
                }
                "-fdir" => {
                    if let Some(value) = tokens.get(i + 1) {
                        if let Some(existing) = &options.directory {
                            log::warn!(
                                "input directory already found, using the first one: {}",
                                existing.display()
                            );
                        } else {
                            options.directory = Some(prefixed(root.as_deref(), value));
                            consumed[i] = true;
                            consumed[i + 1] = true;
                            i += 1;
                        }
                    } else {
                        log::warn!("-fdir expects a directory path, none given");
                    }
                }
                "-bboxdir" => {
                    if let Some(value) = tokens.get(i + 1) {
                        options.bbox_directory = Some(prefixed(root.as_deref(), value));
                        consumed[i] = true;
                        consumed[i + 1] = true;
                        i += 1;
                    } else {
                        log::warn!("-bboxdir expects a directory path, none given");
                    }
                }
                "-fx" => {
                    options.intrinsics.fx = parse_float("-fx", tokens.get(i + 1));
                    i += 1;
                }
                "-fy" => {
                    options.intrinsics.fy = parse_float("-fy", tokens.get(i + 1));
                    i += 1;
                }
                "-cx" => {
                    options.intrinsics.cx = parse_float("-cx", tokens.get(i + 1));
                    i += 1;
                }
                "-cy" => {
                    options.intrinsics.cy = parse_float("-cy", tokens.get(i + 1));
                    i += 1;
                }
                _ => {}
            }
            i += 1;
        }

        *arguments = tokens
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !consumed[*i])
            .map(|(_, token)| token)
            .collect();
        options
    }
}

/// Last `-root`/`-inroot` value, if any. The tokens stay in the list.
fn scan_root(tokens: &[String]) -> Option<PathBuf> {
    let mut root = None;
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i] == "-root" || tokens[i] == "-inroot" {
            if let Some(value) = tokens.get(i + 1) {
                root = Some(PathBuf::from(value));
                i += 1;
            }
        }
        i += 1;
    }
    root
}

// An absolute value replaces the root rather than being appended to it,
// per `Path::join` semantics.
fn prefixed(root: Option<&std::path::Path>, value: &str) -> PathBuf {
    match root {
        Some(root) => root.join(value),
        None => PathBuf::from(value),
    }
}

fn parse_float(flag: &str, value: Option<&String>) -> Option<f32> {
    let value = value?;
    match value.parse::<f32>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("ignoring unparseable value for {flag}: {value}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_explicit_files_in_argument_order() {
        let mut tokens = args(&["-f", "a.png", "-f", "b.png"]);
        let options = SourceOptions::parse(&mut tokens);
        assert_eq!(
            options.image_files,
            vec![PathBuf::from("a.png"), PathBuf::from("b.png")]
        );
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_unrelated_tokens_remain() {
        let mut tokens = args(&["--verbose", "-f", "a.png", "-unknown", "x"]);
        let options = SourceOptions::parse(&mut tokens);
        assert_eq!(options.image_files.len(), 1);
        assert_eq!(tokens, args(&["--verbose", "-unknown", "x"]));
    }

    #[test]
    fn test_root_prefixes_files_and_directories() {
        let mut tokens = args(&["-f", "a.png", "-root", "/data", "-fdir", "seq"]);
        let options = SourceOptions::parse(&mut tokens);
        // Root applies regardless of flag order.
        assert_eq!(options.image_files, vec![PathBuf::from("/data/a.png")]);
        assert_eq!(options.directory, Some(PathBuf::from("/data/seq")));
        // Root tokens are recognized but not consumed.
        assert_eq!(tokens, args(&["-root", "/data"]));
    }

    #[test]
    fn test_absolute_path_ignores_root() {
        let mut tokens = args(&["-root", "/data", "-f", "/abs/a.png"]);
        let options = SourceOptions::parse(&mut tokens);
        assert_eq!(options.image_files, vec![PathBuf::from("/abs/a.png")]);
    }

    #[test]
    fn test_last_root_wins() {
        let mut tokens = args(&["-root", "/one", "-inroot", "/two", "-f", "a.png"]);
        let options = SourceOptions::parse(&mut tokens);
        assert_eq!(options.image_files, vec![PathBuf::from("/two/a.png")]);
    }

    #[test]
    fn test_first_directory_wins() {
        let mut tokens = args(&["-fdir", "first", "-fdir", "second"]);
        let options = SourceOptions::parse(&mut tokens);
        assert_eq!(options.directory, Some(PathBuf::from("first")));
        // The ignored pair stays in the list.
        assert_eq!(tokens, args(&["-fdir", "second"]));
    }

    #[test]
    fn test_bbox_directory() {
        let mut tokens = args(&["-fdir", "seq", "-bboxdir", "boxes"]);
        let options = SourceOptions::parse(&mut tokens);
        assert_eq!(options.bbox_directory, Some(PathBuf::from("boxes")));
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_intrinsics_parsed_but_not_consumed() {
        let mut tokens = args(&["-fx", "500", "-fy", "510", "-cx", "320", "-cy", "240"]);
        let options = SourceOptions::parse(&mut tokens);
        assert_relative_eq!(options.intrinsics.fx.unwrap(), 500.0);
        assert_relative_eq!(options.intrinsics.fy.unwrap(), 510.0);
        assert_relative_eq!(options.intrinsics.cx.unwrap(), 320.0);
        assert_relative_eq!(options.intrinsics.cy.unwrap(), 240.0);
        assert_eq!(tokens.len(), 8);
    }

    #[test]
    fn test_unparseable_intrinsic_left_unset() {
        let mut tokens = args(&["-fx", "fast"]);
        let options = SourceOptions::parse(&mut tokens);
        assert!(options.intrinsics.fx.is_none());
    }

    #[test]
    fn test_trailing_flag_without_value() {
        let mut tokens = args(&["-f"]);
        let options = SourceOptions::parse(&mut tokens);
        assert!(options.image_files.is_empty());
        assert_eq!(tokens, args(&["-f"]));
    }

    #[test]
    fn test_empty_argument_list() {
        let mut tokens = Vec::new();
        let options = SourceOptions::parse(&mut tokens);
        assert!(options.image_files.is_empty());
        assert!(options.directory.is_none());
        assert!(options.bbox_directory.is_none());
    }

    #[test]
    fn test_negative_intrinsic_is_a_value_not_a_sentinel() {
        let mut tokens = args(&["-cx", "-1"]);
        let options = SourceOptions::parse(&mut tokens);
        assert_relative_eq!(options.intrinsics.cx.unwrap(), -1.0);
    }
}
