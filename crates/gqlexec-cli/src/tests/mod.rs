mod execute_cmd_tests;
mod validate_cmd_tests;

use crate::Cli;
use crate::CommandResult;
use clap::Parser;
use std::path::Path;

const BLOG_SDL: &str = "
    type Query {
        article(id: ID): Article
        feed: [Article]
    }

    type Article {
        id: ID!
        title: String
        author: Author
    }

    type Author {
        name: String!
    }
";

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("writing test fixture");
    path
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

async fn run_cli<I, T>(args: I) -> CommandResult
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut cli = Cli::try_parse_from(args).expect("parsing cli args");
    let cmd = cli.cmd.take().expect("a subcommand");
    cmd.run(cli).await
}
