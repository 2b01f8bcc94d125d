use std::error::Error as StdError;
use std::fmt;

use crate::core::message::{DocumentRef, ImageHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentSource {
    Camera,
    PhotoLibrary,
    Document,
}

impl AttachmentSource {
    pub fn label(self) -> &'static str {
        match self {
            AttachmentSource::Camera => "camera",
            AttachmentSource::PhotoLibrary => "photo library",
            AttachmentSource::Document => "document",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    TrayFull { source: AttachmentSource, cap: usize },
}

impl fmt::Display for AttachmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentError::TrayFull { source, cap } => write!(
                f,
                "Only {cap} {} attachments can be added at once",
                source.label()
            ),
        }
    }
}

impl StdError for AttachmentError {}

/// Pending attachments for the next message, one list per source.
///
/// The lists are independent: removal by index touches each list only when it
/// has an element at that index.
#[derive(Debug, Clone, Default)]
pub struct AttachmentTray {
    camera: Vec<ImageHandle>,
    photos: Vec<ImageHandle>,
    documents: Vec<DocumentRef>,
    cap: usize,
}

impl AttachmentTray {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            ..Self::default()
        }
    }

    pub fn camera(&self) -> &[ImageHandle] {
        &self.camera
    }

    pub fn photos(&self) -> &[ImageHandle] {
        &self.photos
    }

    pub fn documents(&self) -> &[DocumentRef] {
        &self.documents
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Lengths as `(camera, photos, documents)`.
    pub fn lens(&self) -> (usize, usize, usize) {
        (self.camera.len(), self.photos.len(), self.documents.len())
    }

    pub fn len(&self) -> usize {
        self.camera.len() + self.photos.len() + self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add_camera_image(&mut self, image: ImageHandle) -> Result<(), AttachmentError> {
        push_capped(&mut self.camera, image, self.cap, AttachmentSource::Camera)
    }

    pub fn add_photo(&mut self, image: ImageHandle) -> Result<(), AttachmentError> {
        push_capped(&mut self.photos, image, self.cap, AttachmentSource::PhotoLibrary)
    }

    pub fn add_document(&mut self, document: DocumentRef) -> Result<(), AttachmentError> {
        push_capped(&mut self.documents, document, self.cap, AttachmentSource::Document)
    }

    /// Removes `index` from every list long enough to have it. Returns how
    /// many entries were removed.
    pub fn remove_at(&mut self, index: usize) -> usize {
        remove_if_present(&mut self.camera, index)
            + remove_if_present(&mut self.photos, index)
            + remove_if_present(&mut self.documents, index)
    }

    /// Empties the tray, returning images (camera first, then library) and
    /// documents.
    pub fn take_all(&mut self) -> (Vec<ImageHandle>, Vec<DocumentRef>) {
        let mut images = std::mem::take(&mut self.camera);
        images.append(&mut self.photos);
        (images, std::mem::take(&mut self.documents))
    }

    pub fn clear(&mut self) {
        self.camera.clear();
        self.photos.clear();
        self.documents.clear();
    }
}

fn push_capped<T>(
    list: &mut Vec<T>,
    item: T,
    cap: usize,
    source: AttachmentSource,
) -> Result<(), AttachmentError> {
    if list.len() >= cap {
        return Err(AttachmentError::TrayFull { source, cap });
    }
    list.push(item);
    Ok(())
}

fn remove_if_present<T>(list: &mut Vec<T>, index: usize) -> usize {
    if index < list.len() {
        list.remove(index);
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> ImageHandle {
        ImageHandle(name.to_string())
    }

    #[test]
    fn each_list_is_capped_independently() {
        let mut tray = AttachmentTray::new(5);
        for i in 0..5 {
            tray.add_camera_image(image(&format!("cam-{i}"))).expect("room");
        }
        assert_eq!(
            tray.add_camera_image(image("cam-5")),
            Err(AttachmentError::TrayFull {
                source: AttachmentSource::Camera,
                cap: 5
            })
        );
        tray.add_photo(image("lib-0")).expect("photos have their own cap");
        assert_eq!(tray.lens(), (5, 1, 0));
    }

    #[test]
    fn remove_touches_only_lists_with_that_index() {
        let mut tray = AttachmentTray::new(5);
        for name in ["a", "b", "c"] {
            tray.add_camera_image(image(name)).expect("room");
        }
        tray.add_photo(image("p")).expect("room");

        assert_eq!(tray.remove_at(1), 1);
        assert_eq!(tray.lens(), (2, 1, 0));
        assert_eq!(tray.camera(), &[image("a"), image("c")]);
        assert_eq!(tray.photos(), &[image("p")]);

        assert_eq!(tray.remove_at(0), 2);
        assert_eq!(tray.lens(), (1, 0, 0));

        assert_eq!(tray.remove_at(7), 0);
        assert_eq!(tray.lens(), (1, 0, 0));
    }

    #[test]
    fn take_all_flattens_camera_before_library() {
        let mut tray = AttachmentTray::new(5);
        tray.add_photo(image("lib")).expect("room");
        tray.add_camera_image(image("cam")).expect("room");
        tray.add_document(DocumentRef("a.pdf".into())).expect("room");

        let (images, documents) = tray.take_all();
        assert_eq!(images, vec![image("cam"), image("lib")]);
        assert_eq!(documents, vec![DocumentRef("a.pdf".into())]);
        assert!(tray.is_empty());
        assert_eq!(tray.cap(), 5);
    }

    #[test]
    fn tray_full_message_names_source() {
        let err = AttachmentError::TrayFull {
            source: AttachmentSource::Document,
            cap: 5,
        };
        assert_eq!(
            err.to_string(),
            "Only 5 document attachments can be added at once"
        );
    }
}
