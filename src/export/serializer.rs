//! Newline-delimited address document
//!
//! One address per line, `\n` between entries, no header, no quoting and
//! no trailing newline. An empty sequence yields an empty document.

use std::io::Write;

use crate::error::Result;

/// Build one address from a local-part and a domain
pub fn address(local_part: &str, domain: &str) -> String {
    let mut out = String::with_capacity(local_part.len() + 1 + domain.len());
    out.push_str(local_part);
    out.push('@');
    out.push_str(domain);
    out
}

/// Serialize local-parts into one document
pub fn serialize<I, S>(local_parts: I, domain: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut document = String::new();
    for (i, local_part) in local_parts.into_iter().enumerate() {
        if i > 0 {
            document.push('\n');
        }
        document.push_str(local_part.as_ref());
        document.push('@');
        document.push_str(domain);
    }
    document
}

/// Stream the same document into `writer`, returning the number of addresses written
pub fn write_document<I, S, W>(local_parts: I, domain: &str, writer: &mut W) -> Result<u64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut count = 0u64;
    for local_part in local_parts {
        if count > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(local_part.as_ref().as_bytes())?;
        writer.write_all(b"@")?;
        writer.write_all(domain.as_bytes())?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
