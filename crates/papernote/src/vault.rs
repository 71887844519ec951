//! File operations on the note directory.
//!
//! A [`Vault`] is a root directory of Markdown notes. Relative paths resolve
//! against the root and absolute paths are used as given. Every read goes to
//! disk; nothing is cached between calls.

use tokio::{fs, io::AsyncWriteExt};

use super::*;

/// A directory of notes.
#[derive(Debug, Clone)]
pub struct Vault {
  /// Directory that relative note paths resolve against
  root: PathBuf,
}

impl Vault {
  /// Opens a vault rooted at `root`.
  pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

  /// The vault's root directory.
  pub fn root(&self) -> &Path { &self.root }

  /// Resolves `path` against the vault root.
  pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
      path.to_path_buf()
    } else {
      self.root.join(path)
    }
  }

  /// Reads a note as text.
  pub async fn read(&self, path: impl AsRef<Path>) -> Result<String> {
    Ok(fs::read_to_string(self.resolve(path)).await?)
  }

  /// Replaces the contents of an existing note.
  pub async fn modify(&self, path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = self.resolve(path);
    debug!("Writing {} bytes to {}", content.len(), path.display());
    fs::write(&path, content).await?;
    Ok(())
  }

  /// Creates a new note, never overwriting an existing file.
  ///
  /// # Errors
  ///
  /// [`PapernoteError::DuplicateFile`] when a file already exists at `path`.
  pub async fn create_note(&self, path: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
    let path = self.resolve(path);
    let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(&path).await {
      Ok(file) => file,
      Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists =>
        return Err(PapernoteError::DuplicateFile(path)),
      Err(e) => return Err(e.into()),
    };
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    debug!("Created note {}", path.display());
    Ok(path)
  }

  /// Moves a note, refusing to replace an existing file.
  pub async fn rename(&self, from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<()> {
    let (from, to) = (self.resolve(from), self.resolve(to));
    if fs::try_exists(&to).await? {
      return Err(PapernoteError::DuplicateFile(to));
    }
    fs::rename(&from, &to).await?;
    debug!("Renamed {} to {}", from.display(), to.display());
    Ok(())
  }

  /// Renames a note after its sanitized title, keeping its directory.
  ///
  /// Returns the new path, or `None` when the title is empty or the note
  /// already carries that name.
  pub async fn rename_to_title(
    &self,
    path: impl AsRef<Path>,
    title: &str,
  ) -> Result<Option<PathBuf>> {
    let Some(filename) = format::note_filename(title) else {
      trace!("Empty title, keeping the current file name");
      return Ok(None);
    };

    let path = self.resolve(path);
    let target = path.with_file_name(filename);
    if target == path {
      return Ok(None);
    }

    self.rename(&path, &target).await?;
    Ok(Some(target))
  }

  /// Reads a binary file such as a PDF.
  pub async fn read_binary(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(fs::read(self.resolve(path)).await?)
  }

  /// Writes a binary file, replacing any existing one.
  pub async fn write_binary(&self, path: impl AsRef<Path>, bytes: &[u8]) -> Result<PathBuf> {
    let path = self.resolve(path);
    fs::write(&path, bytes).await?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path)
  }

  /// Creates a directory and its parents; existing directories are fine.
  pub async fn create_dir(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = self.resolve(path);
    fs::create_dir_all(&path).await?;
    Ok(path)
  }

  /// Whether a file exists at `path`.
  pub async fn exists(&self, path: impl AsRef<Path>) -> Result<bool> {
    Ok(fs::try_exists(self.resolve(path)).await?)
  }

  /// The parsed frontmatter of a note, if it has one.
  pub async fn read_frontmatter(&self, path: impl AsRef<Path>) -> Result<Option<Mapping>> {
    let text = self.read(path).await?;
    Ok(Document::parse(&text)?.frontmatter().cloned())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_create_never_overwrites() {
    let dir = tempdir().unwrap();
    let vault = Vault::new(dir.path());

    let path = vault.create_note("note.md", "first").await.unwrap();
    assert_eq!(path, dir.path().join("note.md"));

    let err = vault.create_note("note.md", "second").await.unwrap_err();
    assert!(matches!(err, PapernoteError::DuplicateFile(p) if p == path));
    assert_eq!(vault.read("note.md").await.unwrap(), "first");
  }

  #[tokio::test]
  async fn test_rename_to_title() {
    let dir = tempdir().unwrap();
    let vault = Vault::new(dir.path());
    vault.create_dir("papers").await.unwrap();
    vault.create_note("papers/draft.md", "body").await.unwrap();

    let renamed = vault.rename_to_title("papers/draft.md", "A: B/C").await.unwrap();
    let expected = dir.path().join("papers").join("A_ B_C.md");
    assert_eq!(renamed, Some(expected.clone()));
    assert_eq!(vault.read(&expected).await.unwrap(), "body");
    assert!(!vault.exists("papers/draft.md").await.unwrap());

    assert_eq!(vault.rename_to_title(&expected, "A: B/C").await.unwrap(), None);
    assert_eq!(vault.rename_to_title(&expected, "  ").await.unwrap(), None);
  }

  #[tokio::test]
  async fn test_rename_refuses_existing_target() {
    let dir = tempdir().unwrap();
    let vault = Vault::new(dir.path());
    vault.create_note("draft.md", "draft").await.unwrap();
    vault.create_note("Taken.md", "keep me").await.unwrap();

    let err = vault.rename_to_title("draft.md", "Taken").await.unwrap_err();
    assert!(matches!(err, PapernoteError::DuplicateFile(_)));
    assert_eq!(vault.read("Taken.md").await.unwrap(), "keep me");
    assert_eq!(vault.read("draft.md").await.unwrap(), "draft");
  }

  #[tokio::test]
  async fn test_create_dir_is_idempotent() {
    let dir = tempdir().unwrap();
    let vault = Vault::new(dir.path());
    let first = vault.create_dir("pdfs/nested").await.unwrap();
    let second = vault.create_dir("pdfs/nested").await.unwrap();
    assert_eq!(first, second);
    assert!(first.is_dir());
  }

  #[tokio::test]
  async fn test_binary_and_frontmatter() {
    let dir = tempdir().unwrap();
    let vault = Vault::new(dir.path());

    vault.write_binary("blob.pdf", &[0x25, 0x50, 0x44, 0x46]).await.unwrap();
    assert_eq!(vault.read_binary("blob.pdf").await.unwrap(), b"%PDF");

    vault.create_note("plain.md", "no block").await.unwrap();
    assert_eq!(vault.read_frontmatter("plain.md").await.unwrap(), None);

    vault.create_note("meta.md", "---\ntitle: T\n---\nbody").await.unwrap();
    let frontmatter = vault.read_frontmatter("meta.md").await.unwrap().unwrap();
    assert_eq!(frontmatter.get("title"), Some(&Value::String("T".into())));
  }
}
