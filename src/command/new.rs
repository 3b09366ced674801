extern crate clap;
extern crate termcolor;

use cf_contest::{
    acquire,
    api::HttpGet,
    cache::{cache_path, write_cache},
    project::{default_package_name, init_toolchain, Lang},
    template::Renderer,
    Contest,
};
use clap::ArgMatches;
use std::{
    env,
    error::Error as StdError,
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use termcolor::StandardStream;

type Result<T> = std::result::Result<T, Box<dyn StdError>>;

pub struct Options {
    pub contest_id: u64,
    pub dir: PathBuf,
    pub name: String,
    pub template: Option<PathBuf>,
    pub lang: Lang,
    pub update: bool,
}
impl Options {
    pub fn from_matches(args: &ArgMatches) -> Self {
        let contest_id = *args.get_one::<u64>("contest").unwrap_or(&0);
        Options {
            contest_id,
            dir: args
                .get_one::<PathBuf>("dir")
                .cloned()
                .or_else(|| env::current_dir().ok())
                .unwrap_or_else(|| PathBuf::from(".")),
            name: args
                .get_one::<String>("name")
                .cloned()
                .unwrap_or_else(|| default_package_name(contest_id)),
            template: args.get_one::<PathBuf>("template").cloned(),
            lang: args
                .get_one::<String>("lang")
                .and_then(|l| l.parse().ok())
                .unwrap_or(Lang::Rust),
            update: *args.get_one::<bool>("update").unwrap_or(&false),
        }
    }
}

fn render_solutions(
    stdout: &mut StandardStream,
    contest: &Contest,
    contest_dir: &Path,
    lang: Lang,
    template: &Path,
) -> Result<()> {
    let content = fs::read_to_string(template)
        .map_err(|e| format!("Error reading template {}: {}", template.display(), e))?;
    let renderer = Renderer::new(&content)?;
    for problem in contest.problems() {
        let path = contest_dir.join(lang.solution_path(problem.index()));
        if path.exists() {
            write_warn!(stdout, "Skip", "{} already exists", path.display());
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, renderer.render(contest, problem)?)?;
        write_ok!(stdout, "Create", "{}", path.display());
    }
    Ok(())
}

fn print_summary(stdout: &mut StandardStream, contest: &Contest) {
    let division = match contest.division() {
        [] => String::from("-"),
        d => d
            .iter()
            .map(|d| format!("Div. {}", d))
            .collect::<Vec<_>>()
            .join(" + "),
    };
    write_info!(stdout, "Contest", "{}", contest);
    write_info!(
        stdout,
        "Info",
        "division: {}, finished: {}",
        division,
        contest.finished()
    );
    for p in contest.problems() {
        let rating = p
            .rating()
            .map_or_else(|| String::from("?"), |r| r.to_string());
        writeln!(
            stdout,
            "{:>7}  {:<40} {:>7} {:>5}  {}",
            p.index(),
            p.name(),
            p.points(),
            rating,
            p.url()
        )
        .expect("Failed to write output");
    }
}

pub fn new_contest<H: HttpGet + ?Sized>(
    stdout: &mut StandardStream,
    http: &H,
    opt: &Options,
) -> Result<()> {
    let contest_dir = opt.dir.join(opt.contest_id.to_string());
    if contest_dir.exists() {
        write_warn!(
            stdout,
            "Exists",
            "Contest directory {} already exists",
            contest_dir.display()
        );
    }
    let (contest, fetched) = acquire(http, opt.contest_id, &opt.dir, opt.update)?;
    if !fetched {
        write_warn!(
            stdout,
            "Cached",
            "Contest {} already exists in {}. Use -u to update.",
            opt.contest_id,
            opt.dir.display()
        );
    }

    fs::create_dir_all(&contest_dir)?;
    if init_toolchain(opt.lang, &contest_dir, &opt.name)? {
        write_ok!(stdout, "Init", "{} project {}", opt.lang, opt.name);
    }
    if fetched {
        let path = cache_path(&opt.dir, opt.contest_id);
        write_cache(&path, &contest)?;
        write_ok!(stdout, "Saved", "{}", path.display());
    }
    if let Some(template) = &opt.template {
        render_solutions(stdout, &contest, &contest_dir, opt.lang, template)?;
    }
    print_summary(stdout, &contest);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use cf_contest::{api::HttpResponse, error::BoxedError};
    use std::cell::Cell;
    use tempfile::tempdir;
    use termcolor::ColorChoice;

    struct CountingHttp {
        body: String,
        calls: Cell<usize>,
    }
    impl CountingHttp {
        fn new(contest_id: u64) -> Self {
            CountingHttp {
                body: format!(
                    r#"{{"status":"OK","result":{{
                        "contest":{{"id":{},"name":"Codeforces Round 900 (Div. 2)","phase":"FINISHED"}},
                        "problems":[
                            {{"index":"A","name":"First","points":500.0,"rating":800}},
                            {{"index":"B","name":"Second","points":1000.0}}
                        ]}}}}"#,
                    contest_id
                ),
                calls: Cell::new(0),
            }
        }
    }
    impl HttpGet for CountingHttp {
        fn get(&self, _url: &str) -> std::result::Result<HttpResponse, BoxedError> {
            self.calls.set(self.calls.get() + 1);
            Ok(HttpResponse {
                status: 200,
                body: self.body.clone(),
            })
        }
    }

    fn options(dir: &Path, template: Option<PathBuf>, update: bool) -> Options {
        Options {
            contest_id: 1870,
            dir: dir.to_path_buf(),
            name: default_package_name(1870),
            template,
            lang: Lang::Rust,
            update,
        }
    }

    fn quiet() -> StandardStream {
        StandardStream::stdout(ColorChoice::Never)
    }

    /// Keeps `cargo init` from running inside the test directory.
    fn existing_project(dir: &Path) {
        let contest_dir = dir.join("1870");
        fs::create_dir_all(&contest_dir).unwrap();
        fs::write(contest_dir.join("Cargo.toml"), "[package]\n").unwrap();
    }

    #[test]
    fn cache_written_once() {
        let dir = tempdir().unwrap();
        existing_project(dir.path());
        let path = cache_path(dir.path(), 1870);

        let http = CountingHttp::new(1870);
        new_contest(&mut quiet(), &http, &options(dir.path(), None, false)).unwrap();
        assert_eq!(http.calls.get(), 1);
        assert!(path.exists());

        fs::write(
            &path,
            fs::read_to_string(&path).unwrap().replace("First", "Renamed"),
        )
        .unwrap();
        let before = fs::read_to_string(&path).unwrap();
        let http = CountingHttp::new(1870);
        new_contest(&mut quiet(), &http, &options(dir.path(), None, false)).unwrap();
        assert_eq!(http.calls.get(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn update_refetches_and_rewrites() {
        let dir = tempdir().unwrap();
        existing_project(dir.path());
        let path = cache_path(dir.path(), 1870);
        new_contest(&mut quiet(), &CountingHttp::new(1870), &options(dir.path(), None, false))
            .unwrap();
        fs::write(
            &path,
            fs::read_to_string(&path).unwrap().replace("First", "Renamed"),
        )
        .unwrap();

        let http = CountingHttp::new(1870);
        new_contest(&mut quiet(), &http, &options(dir.path(), None, true)).unwrap();
        assert_eq!(http.calls.get(), 1);
        assert!(fs::read_to_string(&path).unwrap().contains("First"));
    }

    #[test]
    fn solutions_keep_existing_files() {
        let dir = tempdir().unwrap();
        existing_project(dir.path());
        let template = dir.path().join("template.rs");
        fs::write(&template, "// {{index}} {{url}}\n").unwrap();
        let bin = dir.path().join("1870").join("src").join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("a.rs"), "fn main() {}\n").unwrap();

        new_contest(
            &mut quiet(),
            &CountingHttp::new(1870),
            &options(dir.path(), Some(template), false),
        )
        .unwrap();
        assert_eq!(fs::read_to_string(bin.join("a.rs")).unwrap(), "fn main() {}\n");
        assert_eq!(
            fs::read_to_string(bin.join("b.rs")).unwrap(),
            "// B https://codeforces.com/contest/1870/problem/B\n"
        );
    }
}
