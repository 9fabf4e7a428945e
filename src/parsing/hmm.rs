//! Reader for gzip-compressed HMMER3 profile files.
//!
//! Only the profile header is inspected: the `NAME` and `ACC` lines of each
//! profile, up to the `//` terminator. Model parameters are skipped.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::core::types::HmmProfile;
use crate::parsing::tsv::ParseError;

/// Read all profile names from a gzip-compressed HMM file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or decompressed, or
/// `ParseError::InvalidFormat` if the content is not an HMMER3 profile file.
pub fn read_profiles(path: &Path) -> Result<Vec<HmmProfile>, ParseError> {
    let file = std::fs::File::open(path)?;
    let decoder = GzDecoder::new(file);
    parse_profiles(decoder)
}

/// Parse profile headers from an uncompressed HMMER3 stream
///
/// # Errors
///
/// Returns `ParseError::Io` on read failures, or `ParseError::InvalidFormat`
/// if the stream does not start with an `HMMER` format line, a profile has no
/// `NAME`, or the last profile is not terminated by `//`.
pub fn parse_profiles<R: Read>(reader: R) -> Result<Vec<HmmProfile>, ParseError> {
    let reader = BufReader::new(reader);
    let mut profiles = Vec::new();

    let mut name: Option<String> = None;
    let mut accession: Option<String> = None;
    let mut in_profile = false;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = i + 1;

        if line.starts_with("HMMER") {
            if in_profile {
                return Err(ParseError::InvalidFormat(format!(
                    "Profile ending before line {line_num} is missing its '//' terminator"
                )));
            }
            in_profile = true;
            continue;
        }

        if !in_profile {
            if line.trim().is_empty() {
                continue;
            }
            return Err(ParseError::InvalidFormat(format!(
                "Expected an HMMER format line on line {line_num}"
            )));
        }

        if line.starts_with("//") {
            let profile_name = name.take().ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "Profile ending on line {line_num} has no NAME"
                ))
            })?;
            profiles.push(HmmProfile {
                name: profile_name,
                accession: accession.take(),
            });
            in_profile = false;
            continue;
        }

        if let Some(rest) = line.strip_prefix("NAME") {
            name = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("ACC") {
            accession = Some(rest.trim().to_string());
        }
    }

    if in_profile {
        return Err(ParseError::InvalidFormat(
            "Last profile is missing its '//' terminator".to_string(),
        ));
    }

    Ok(profiles)
}
