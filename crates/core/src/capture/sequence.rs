use std::fs;
use std::path::{Path, PathBuf};

use image::GrayImage;

use crate::capture::annotations;
use crate::capture::args::SourceOptions;
use crate::capture::error::OpenError;
use crate::capture::grayscale;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::constants::IMAGE_EXTENSIONS;
use crate::shared::frame::Frame;
use crate::shared::intrinsics::{CameraIntrinsics, IntrinsicsHint};

/// Serves an enumerated set of images one frame at a time.
///
/// The file list and any bounding boxes are fixed at open time; a
/// monotonically advancing cursor is the only mutable state besides the
/// single resident frame, which is replaced wholesale on each retrieval.
/// Callers that need to keep a frame must clone it before the next call.
#[derive(Debug)]
pub struct ImageSequence {
    image_files: Vec<PathBuf>,
    bounding_boxes: Option<Vec<Vec<BoundingBox>>>,
    fixed_intrinsics: Option<CameraIntrinsics>,
    frame_num: usize,
    latest: Option<Frame>,
}

impl ImageSequence {
    /// Opens a source described by a flat argument list, stripping the
    /// recognized flags from `arguments` (see [`SourceOptions::parse`]).
    pub fn open(arguments: &mut Vec<String>) -> Result<Self, OpenError> {
        let options = SourceOptions::parse(arguments);
        Self::from_options(options)
    }

    /// Opens from an already-parsed source description.
    ///
    /// Explicit files take precedence over a directory; bounding boxes are
    /// only loaded for directory sources.
    pub fn from_options(options: SourceOptions) -> Result<Self, OpenError> {
        if !options.image_files.is_empty() {
            return Ok(Self::from_files(options.image_files, options.intrinsics));
        }
        if let Some(directory) = &options.directory {
            return Self::from_directory(
                directory,
                options.bbox_directory.as_deref(),
                options.intrinsics,
            );
        }
        Err(OpenError::NoInputSpecified)
    }

    /// Opens an explicit file list, in the given order.
    ///
    /// Missing files are not detected here; they surface as decode
    /// failures during retrieval.
    pub fn from_files(image_files: Vec<PathBuf>, intrinsics: IntrinsicsHint) -> Self {
        Self {
            image_files,
            bounding_boxes: None,
            fixed_intrinsics: intrinsics.resolve(),
            frame_num: 0,
            latest: None,
        }
    }

    /// Scans a directory for images, enumerated in lexicographic order of
    /// the full path. With a bounding-box directory, every image must have
    /// a sibling `<stem>.txt` annotation under it.
    pub fn from_directory(
        directory: &Path,
        bbox_directory: Option<&Path>,
        intrinsics: IntrinsicsHint,
    ) -> Result<Self, OpenError> {
        log::info!("attempting to read from directory: {}", directory.display());

        let mut entries: Vec<PathBuf> = fs::read_dir(directory)
            .map_err(|source| OpenError::ReadDirectory {
                path: directory.to_path_buf(),
                source,
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect();
        entries.sort();

        let image_files: Vec<PathBuf> = entries
            .into_iter()
            .filter(|path| has_image_extension(path))
            .collect();

        if image_files.is_empty() {
            return Err(OpenError::NoImagesFound {
                directory: directory.to_path_buf(),
            });
        }

        let bounding_boxes = match bbox_directory {
            Some(bbox_dir) => Some(load_bounding_boxes(&image_files, bbox_dir)?),
            None => None,
        };

        Ok(Self {
            image_files,
            bounding_boxes,
            fixed_intrinsics: intrinsics.resolve(),
            frame_num: 0,
            latest: None,
        })
    }

    /// Decodes and returns the next frame, or `None` once the sequence is
    /// exhausted (repeated calls past the end keep returning `None`).
    ///
    /// A decode failure is logged and served as an empty frame; retrieval
    /// continues with the following image on the next call.
    pub fn next_frame(&mut self) -> Option<&Frame> {
        if self.frame_num >= self.image_files.len() {
            return None;
        }
        self.frame_num += 1;
        let path = &self.image_files[self.frame_num - 1];
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let frame = match image::open(path) {
            Ok(image) => {
                let intrinsics = self.resolve_intrinsics(image.width(), image.height());
                let gray = grayscale::to_grayscale(&image);
                Frame::new(image, gray, name, intrinsics)
            }
            Err(err) => {
                log::error!("could not open the image {}: {err}", path.display());
                Frame::empty(name, self.resolve_intrinsics(0, 0))
            }
        };
        self.latest = Some(frame);
        self.latest.as_ref()
    }

    /// Iterator over the remaining frames, cloning each decoded frame out
    /// of the resident slot.
    pub fn frames(&mut self) -> Frames<'_> {
        Frames { sequence: self }
    }

    /// Bounding boxes for the frame at the current cursor position; empty
    /// when none were configured or nothing has been retrieved yet.
    pub fn bounding_boxes(&self) -> &[BoundingBox] {
        match (&self.bounding_boxes, self.frame_num) {
            (Some(all), n) if n > 0 => &all[n - 1],
            _ => &[],
        }
    }

    /// Fraction of the sequence served so far, in `[0, 1]`. Zero for an
    /// empty sequence.
    pub fn progress(&self) -> f64 {
        if self.image_files.is_empty() {
            return 0.0;
        }
        self.frame_num as f64 / self.image_files.len() as f64
    }

    pub fn latest(&self) -> Option<&Frame> {
        self.latest.as_ref()
    }

    pub fn gray_frame(&self) -> Option<&GrayImage> {
        self.latest.as_ref().map(|frame| frame.gray())
    }

    /// 1-based count of frames served so far.
    pub fn frame_num(&self) -> usize {
        self.frame_num
    }

    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    fn resolve_intrinsics(&self, width: u32, height: u32) -> CameraIntrinsics {
        self.fixed_intrinsics
            .unwrap_or_else(|| CameraIntrinsics::derive(width, height, IntrinsicsHint::default()))
    }
}

/// Draining iterator over an [`ImageSequence`].
pub struct Frames<'a> {
    sequence: &'a mut ImageSequence,
}

impl Iterator for Frames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.sequence.next_frame().cloned()
    }
}

fn has_image_extension(path: &Path) -> bool {
    // Case-sensitive: `.PNG` does not qualify.
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

fn load_bounding_boxes(
    image_files: &[PathBuf],
    bbox_directory: &Path,
) -> Result<Vec<Vec<BoundingBox>>, OpenError> {
    let mut all = Vec::with_capacity(image_files.len());
    for image in image_files {
        let expected = annotation_path(image, bbox_directory);
        if !expected.exists() {
            return Err(OpenError::MissingAnnotation {
                image: image.clone(),
                expected,
            });
        }
        all.push(annotations::parse_annotation_file(&expected)?);
    }
    // One annotation set per image, indexed identically.
    debug_assert_eq!(all.len(), image_files.len());
    Ok(all)
}

/// Annotation path for an image: the image's file name with its final
/// extension replaced by `.txt`, rebased under the bounding-box directory.
/// Only the last extension is replaced, so `shot.001.png` maps to
/// `shot.001.txt`.
fn annotation_path(image: &Path, bbox_directory: &Path) -> PathBuf {
    let name = image.file_name().unwrap_or_default();
    bbox_directory.join(name).with_extension("txt")
}
