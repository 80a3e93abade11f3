use std::io::Read;

use super::context::ShaderStage;
use super::shader::ShaderError;

const VERTEX_MARKER: &str = "VERTEX_SHADER";
const FRAGMENT_MARKER: &str = "FRAGMENT_SHADER";
const LINE_TERMINATOR: &str = "\r\n";

/// Shader text split into its two stage sections.
///
/// The input format is a single blob where a line containing `VERTEX_SHADER`
/// or `FRAGMENT_SHADER` switches the section that subsequent lines belong to.
/// Markers may repeat in any order; the most recent one wins. A content line
/// seen before any marker is a hard parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSource {
    vertex: String,
    fragment: String,
}

impl ShaderSource {
    pub fn parse(text: &str) -> Result<Self, ShaderError> {
        let mut source = ShaderSource::default();
        let mut active: Option<ShaderStage> = None;

        for line in text.lines() {
            if line.contains(VERTEX_MARKER) {
                active = Some(ShaderStage::Vertex);
            } else if line.contains(FRAGMENT_MARKER) {
                active = Some(ShaderStage::Fragment);
            } else {
                let buffer = match active {
                    Some(ShaderStage::Vertex) => &mut source.vertex,
                    Some(ShaderStage::Fragment) => &mut source.fragment,
                    None => return Err(ShaderError::MalformedSource),
                };

                buffer.push_str(line);
                buffer.push_str(LINE_TERMINATOR);
            }
        }

        Ok(source)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self, ShaderError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    pub fn vertex(&self) -> &str {
        &self.vertex
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}
