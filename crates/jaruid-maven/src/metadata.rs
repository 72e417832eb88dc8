//! `maven-metadata.xml` parsing for version discovery (§4.6).

use quick_xml::events::Event;
use quick_xml::Reader;

use jaruid_util::errors::JarUidError;

/// Artifact-level metadata listing every declared version.
#[derive(Debug, Clone, Default)]
pub struct MavenMetadata {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub latest: Option<String>,
    pub release: Option<String>,
    pub versions: Vec<String>,
}

/// Parse an artifact-level `maven-metadata.xml`.
pub fn parse_metadata(xml: &str) -> Result<MavenMetadata, JarUidError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut meta = MavenMetadata::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).to_string());
                text_buf.clear();
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => {
                match path.join(">").as_str() {
                    "metadata>groupId" => meta.group_id = Some(text_buf.clone()),
                    "metadata>artifactId" => meta.artifact_id = Some(text_buf.clone()),
                    "metadata>versioning>latest" => meta.latest = Some(text_buf.clone()),
                    "metadata>versioning>release" => meta.release = Some(text_buf.clone()),
                    "metadata>versioning>versions>version" => meta.versions.push(text_buf.clone()),
                    _ => {}
                }
                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(JarUidError::Network {
                    message: format!("failed to parse maven-metadata.xml: {e}"),
                })
            }
            _ => {}
        }
    }

    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>org.example</groupId>
  <artifactId>lib</artifactId>
  <versioning>
    <latest>2.0.0</latest>
    <release>2.0.0</release>
    <versions>
      <version>1.0.0</version>
      <version>1.5.0</version>
      <version>2.0.0</version>
    </versions>
  </versioning>
</metadata>"#;

    #[test]
    fn parses_version_list_in_document_order() {
        let meta = parse_metadata(XML).unwrap();
        assert_eq!(meta.versions, vec!["1.0.0", "1.5.0", "2.0.0"]);
        assert_eq!(meta.latest.as_deref(), Some("2.0.0"));
    }

    #[test]
    fn parses_group_and_artifact() {
        let meta = parse_metadata(XML).unwrap();
        assert_eq!(meta.group_id.as_deref(), Some("org.example"));
        assert_eq!(meta.artifact_id.as_deref(), Some("lib"));
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(parse_metadata("<metadata><a></b></metadata>").is_err());
    }
}
