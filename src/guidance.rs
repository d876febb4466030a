use std::io::{self, Write};

use once_cell::sync::Lazy;

pub const REMOTE: &str = "origin";
pub const BRANCH: &str = "main";
pub const ACCOUNT: &str = "your-username";
pub const REPOSITORY: &str = "your-repo";

pub const TITLE: &str = "🔐 GitHub Authentication Setup";
pub const REMOTE_LABEL: &str = "🔗 Current remote URL:";

static TEXT: Lazy<String> = Lazy::new(render);

fn render() -> String {
    format!(
        "{TITLE}
==============================

📋 Create a Personal Access Token:
1. Go to https://github.com/settings/tokens
2. Click \"Generate new token (classic)\"
3. Select the \"repo\" scope
4. Click \"Generate token\" and copy it somewhere safe

⚙️  Option 1: Put the token in the remote URL
git remote set-url {REMOTE} https://YOUR_TOKEN@github.com/{ACCOUNT}/{REPOSITORY}.git

⚙️  Option 2: Let the credential helper remember it
git config --global credential.helper store
git remote set-url {REMOTE} https://github.com/{ACCOUNT}/{REPOSITORY}.git
(use YOUR_TOKEN as the password on the next push)

⚙️  Option 3: Use an SSH key instead
ssh-keygen -t ed25519 -C \"you@example.com\"
(add ~/.ssh/id_ed25519.pub at https://github.com/settings/keys)
git remote set-url {REMOTE} git@github.com:{ACCOUNT}/{REPOSITORY}.git

🚀 Then push with:
git push -u {REMOTE} {BRANCH}

"
    )
}

/// The fixed instructions, everything up to but not including the remote URL label.
pub fn text() -> &'static str {
    &TEXT
}

/// Writes the instructions and the remote URL label, then flushes so the
/// label is on screen before git gets to write anything.
pub fn write_guidance<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(text().as_bytes())?;
    writeln!(out, "{REMOTE_LABEL}")?;
    out.flush()
}
