#![allow(dead_code)]
use std::fs;
use std::io::Result as IoResult;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Analyzer output with a banner, two errors and three warnings.
pub const MIXED_OUTPUT: &str = "\
glualint 1.24.6
lua/autorun/a.lua: [Error] line 3, column 1 - line 3, column 10: Unused variable: x
lua/autorun/a.lua: [Warning] line 8, column 2 - line 8, column 20: Deprecated: table.getn
lua/autorun/b.lua: [Warning] line 1, column 1 - line 1, column 4: Deprecated: SetGlobalInt
lua/autorun/b.lua: [Error] line 9, column 5 - line 9, column 30: Inconsistent use of 'and' and '&&'
lua/autorun/c.lua: [Warning] line 2, column 7 - line 2, column 8: Style: Please put some whitespace after ','
";

/// Analyzer output with warnings only.
pub const WARNINGS_ONLY: &str = "\
lua/x.lua: [Warning] line 1, column 1 - line 1, column 9: Deprecated: foo()
lua/y.lua: [Warning] line 4, column 1 - line 4, column 9: Deprecated: foo()
";

/// A temporary directory holding captured analyzer output.
pub struct TestWorkspace {
    /// The temporary directory. When this is dropped, the directory and its contents are removed.
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> IoResult<Self> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path().to_path_buf();
        Ok(TestWorkspace { temp_dir, root })
    }

    /// Writes `contents` to `name` inside the workspace and returns its path.
    pub fn write(&self, name: &str, contents: &str) -> IoResult<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}
