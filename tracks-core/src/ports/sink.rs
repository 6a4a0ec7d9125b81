use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

/// A write-only destination for one overlay document.
///
/// `open` hands out a scoped writer, the destination is released when the writer is dropped,
/// which also covers a compile that fails halfway through.
pub trait OutputSink {
    type Writer<'a>: Write
    where
        Self: 'a;

    fn open(&mut self) -> std::io::Result<Self::Writer<'_>>;
}

/// Writes the document to a file, creating or truncating it on open.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for FileSink {
    type Writer<'a> = BufWriter<File>;

    fn open(&mut self) -> std::io::Result<Self::Writer<'_>> {
        Ok(BufWriter::new(File::create(&self.path)?))
    }
}

impl OutputSink for Vec<u8> {
    type Writer<'a> = &'a mut Vec<u8>;

    fn open(&mut self) -> std::io::Result<Self::Writer<'_>> {
        self.clear();
        Ok(self)
    }
}
