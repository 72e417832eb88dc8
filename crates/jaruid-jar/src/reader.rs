use std::io::{Cursor, Read};

use jaruid_core::jar::{ClassEntry, JarContents};
use jaruid_util::errors::JarUidError;

/// The parsed jar plus each entry's uncompressed bytes, in enumeration
/// order, as needed by the hasher (§4.2 requires uncompressed content in
/// entry-enumeration order, not jar bytes).
pub struct ReadJar {
    pub contents: JarContents,
    pub uncompressed_entries: Vec<Vec<u8>>,
}

/// Read a jar fully into memory once, classifying each non-directory entry:
/// the manifest at `META-INF/MANIFEST.MF`, a `pom.xml`/`pom.properties`
/// (case-insensitive basename match), or a `.class` file (path + timestamps
/// retained, bytecode discarded). Other entries are discarded but still
/// contribute their uncompressed bytes to the hash sequence.
pub fn read_jar(bytes: &[u8]) -> Result<ReadJar, JarUidError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| JarUidError::MalformedJar {
        jar: String::new(),
        message: format!("failed to open zip central directory: {e}"),
    })?;

    let mut contents = JarContents::default();
    let mut uncompressed_entries = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| JarUidError::MalformedJar {
                jar: String::new(),
                message: format!("zip entry {i} unreadable: {e}"),
            })?;

        if entry.is_dir() {
            continue;
        }

        let name = entry.mangled_name().to_string_lossy().replace('\\', "/");
        let created = entry.last_modified().map(|dt| {
            dos_datetime_to_unix(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute(), dt.second())
        });

        let mut buf = Vec::new();
        entry
            .read_to_end(&mut buf)
            .map_err(|e| JarUidError::MalformedJar {
                jar: String::new(),
                message: format!("failed to read entry {name}: {e}"),
            })?;

        if name.eq_ignore_ascii_case("META-INF/MANIFEST.MF") {
            contents.manifest = Some(String::from_utf8_lossy(&buf).into_owned());
        } else if basename(&name).eq_ignore_ascii_case("pom.xml") {
            contents.pom_xml = Some(String::from_utf8_lossy(&buf).into_owned());
        } else if basename(&name).eq_ignore_ascii_case("pom.properties") {
            contents.pom_properties = Some(String::from_utf8_lossy(&buf).into_owned());
        } else if name.ends_with(".class") {
            contents.classes.push(ClassEntry {
                path: name,
                created,
                last_modified: created,
            });
        }

        uncompressed_entries.push(buf);
    }

    Ok(ReadJar {
        contents,
        uncompressed_entries,
    })
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Convert a zip entry's DOS-epoch date/time fields to a Unix timestamp.
/// Zip timestamps have 2-second resolution and no timezone; treated as UTC.
fn dos_datetime_to_unix(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> i64 {
    // Days since the Unix epoch via a proleptic Gregorian day count.
    fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
        let y = if m <= 2 { y - 1 } else { y };
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = (y - era * 400) as i64;
        let mp = (m + 9) % 12;
        let doy = (153 * mp + 2) / 5 + d - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146097 + doe - 719468
    }
    let days = days_from_civil(year as i64, month as i64, day as i64);
    days * 86_400 + hour as i64 * 3_600 + minute as i64 * 60 + second as i64
}
