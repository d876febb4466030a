pub mod guidance;
pub mod remote;

use std::io::Write;

use anyhow::Result;

pub use remote::RemoteUrl;

/// Prints the guidance, then whatever git reports for the `origin` remote.
/// The returned value carries git's exit status for the caller to propagate.
pub async fn run<O: Write, E: Write>(out: &mut O, err: &mut E) -> Result<RemoteUrl> {
    guidance::write_guidance(out)?;
    let url = remote::query(guidance::REMOTE).await?;
    url.write_to(out, err)?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "current_thread")]
    async fn label_precedes_git_output() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let url = match run(&mut out, &mut err).await {
            Ok(url) => url,
            Err(e) if remote::spawn_failure_code(&e).is_some() => return,
            Err(e) => panic!("{e:?}"),
        };
        let out = String::from_utf8_lossy(&out);
        assert!(out.starts_with(guidance::TITLE));
        let label = out.find(guidance::REMOTE_LABEL).unwrap();
        assert_eq!(&out[..label], guidance::text());
        if url.success() {
            assert!(err.is_empty());
        } else {
            assert!(!err.is_empty());
        }
    }
}
