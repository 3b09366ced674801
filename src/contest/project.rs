//! Layout of a contest working directory.
use std::{
    error::Error as StdError,
    fmt, io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Cpp,
    Rust,
}
impl FromStr for Lang {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpp" => Ok(Lang::Cpp),
            "rust" => Ok(Lang::Rust),
            other => Err(format!("unknown language {}", other)),
        }
    }
}
impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lang::Cpp => "cpp",
            Lang::Rust => "rust",
        })
    }
}

impl Lang {
    /// Where the solution of problem `index` lives, relative to the contest directory.
    pub fn solution_path(self, index: &str) -> PathBuf {
        let stem = index.to_lowercase();
        match self {
            Lang::Cpp => PathBuf::from(format!("{}.cpp", stem)),
            Lang::Rust => Path::new("src").join("bin").join(format!("{}.rs", stem)),
        }
    }
}

#[derive(Debug)]
pub enum InitError {
    Spawn(io::Error),
    Status(ExitStatus),
}
impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Spawn(e) => write!(f, "Error launching cargo: {}", e),
            InitError::Status(s) => write!(f, "cargo init failed: {}", s),
        }
    }
}
impl StdError for InitError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            InitError::Spawn(e) => Some(e),
            InitError::Status(_) => None,
        }
    }
}

/// Default toolchain package name; cargo rejects names starting with a digit.
pub fn default_package_name(contest_id: u64) -> String {
    format!("contest-{}", contest_id)
}

/// Runs the toolchain's project bootstrap in `dir`.
/// Returns `false` when there was nothing to do.
pub fn init_toolchain(lang: Lang, dir: &Path, name: &str) -> Result<bool, InitError> {
    match lang {
        Lang::Cpp => Ok(false),
        Lang::Rust if dir.join("Cargo.toml").exists() => Ok(false),
        Lang::Rust => {
            let status = Command::new("cargo")
                .args(&["init", "--name", name])
                .current_dir(dir)
                .status()
                .map_err(InitError::Spawn)?;
            if status.success() {
                Ok(true)
            } else {
                Err(InitError::Status(status))
            }
        }
    }
}
