//! In-process `~/.m2/settings.xml` reader (C9).
//!
//! Replaces shelling out to `mvn help:effective-settings`: extracts
//! repositories from every profile that is either named in
//! `<activeProfiles>` or carries `<activation><activeByDefault>true</...>`.
//! A missing or absent file yields zero extra repositories; it is not an
//! error (Maven Central is appended unconditionally by the caller).

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use jaruid_core::config::RemoteRepository;
use jaruid_util::errors::JarUidError;

#[derive(Debug, Default)]
struct ProfileBuilder {
    id: Option<String>,
    active_by_default: bool,
    repositories: Vec<RemoteRepository>,
}

#[derive(Debug, Default)]
struct RepoBuilder {
    id: Option<String>,
    url: Option<String>,
}

/// Parse `settings.xml` content into the repositories contributed by active
/// profiles.
pub fn parse_settings(xml: &str) -> Result<Vec<RemoteRepository>, JarUidError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    let mut active_profile_ids: Vec<String> = Vec::new();
    let mut profiles: Vec<ProfileBuilder> = Vec::new();
    let mut current_profile: Option<ProfileBuilder> = None;
    let mut current_repo: Option<RepoBuilder> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                path.push(tag);
                text_buf.clear();

                let ctx = path.join(">");
                if ctx == "settings>profiles>profile" {
                    current_profile = Some(ProfileBuilder::default());
                } else if ctx.ends_with(">repositories>repository") && current_profile.is_some() {
                    current_repo = Some(RepoBuilder::default());
                }
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => {
                let ctx = path.join(">");

                if let Some(repo) = current_repo.as_mut() {
                    match path.last().map(|s| s.as_str()) {
                        Some("id") if ctx.ends_with(">repository>id") => {
                            repo.id = Some(text_buf.clone());
                        }
                        Some("url") if ctx.ends_with(">repository>url") => {
                            repo.url = Some(text_buf.clone());
                        }
                        _ => {}
                    }
                    if ctx.ends_with(">repositories>repository") {
                        if let Some(repo) = current_repo.take() {
                            if let (Some(id), Some(url)) = (repo.id, repo.url) {
                                if let Some(profile) = current_profile.as_mut() {
                                    profile.repositories.push(RemoteRepository::new(id, url));
                                }
                            }
                        }
                    }
                } else if let Some(profile) = current_profile.as_mut() {
                    match path.last().map(|s| s.as_str()) {
                        Some("id") if ctx == "settings>profiles>profile>id" => {
                            profile.id = Some(text_buf.clone());
                        }
                        Some("activeByDefault")
                            if ctx == "settings>profiles>profile>activation>activeByDefault" =>
                        {
                            profile.active_by_default = text_buf.trim() == "true";
                        }
                        _ => {}
                    }
                }

                if ctx == "settings>activeProfiles>activeProfile" {
                    active_profile_ids.push(text_buf.clone());
                }
                if ctx == "settings>profiles>profile" {
                    if let Some(profile) = current_profile.take() {
                        profiles.push(profile);
                    }
                }

                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(JarUidError::Config {
                    message: format!("failed to parse settings.xml: {e}"),
                })
            }
            _ => {}
        }
    }

    let mut repositories = Vec::new();
    for profile in profiles {
        let is_active = profile.active_by_default
            || profile
                .id
                .as_ref()
                .map(|id| active_profile_ids.contains(id))
                .unwrap_or(false);
        if is_active {
            repositories.extend(profile.repositories);
        }
    }
    Ok(repositories)
}

/// Read and parse `~/.m2/settings.xml`. Absence of the file is not an
/// error: returns an empty repository list.
pub fn read_user_settings() -> Result<Vec<RemoteRepository>, JarUidError> {
    let path = default_settings_path();
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path).map_err(|e| JarUidError::Config {
        message: format!("failed to read {}: {e}", path.display()),
    })?;
    parse_settings(&content)
}

fn default_settings_path() -> std::path::PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".m2").join("settings.xml")
}
