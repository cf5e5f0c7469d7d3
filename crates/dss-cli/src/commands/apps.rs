use dss_core::responses::AppPage;

use crate::cli::root_commands::AppsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &AppsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = page(args, ctx)?;

    if flags.format != OutputFormat::Table {
        return output(&page, flags);
    }

    output(&page.apps, flags)?;
    if !flags.quiet {
        println!("page {}/{}", page.page + 1, page.total_pages);
    }
    Ok(())
}

fn page(args: &AppsArgs, ctx: &AppContext) -> anyhow::Result<AppPage> {
    let page_size = args.page_size.unwrap_or(ctx.config.general.page_size);
    let cursor = ctx.catalog.cursor(page_size)?.at(args.page);
    Ok(ctx.catalog.page(cursor))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::page;
    use crate::cli::root_commands::AppsArgs;
    use crate::commands::fixtures;

    fn names(page_index: usize, page_size: usize) -> (usize, usize, Vec<String>) {
        let ctx = fixtures::context();
        let args = AppsArgs {
            page: page_index,
            page_size: Some(page_size),
        };
        let page = page(&args, &ctx).expect("page should build");
        let names = page.apps.into_iter().map(|app| app.name).collect();
        (page.page, page.total_pages, names)
    }

    #[test]
    fn pages_follow_directory_order() {
        assert_eq!(
            names(0, 2),
            (0, 2, vec!["Acme Chat".to_string(), "Beta Maps".to_string()])
        );
        assert_eq!(names(1, 2), (1, 2, vec!["Gamma Notes".to_string()]));
    }

    #[test]
    fn page_index_wraps() {
        assert_eq!(names(2, 2).0, 0);
    }

    #[test]
    fn default_page_size_comes_from_config() {
        let ctx = fixtures::context();
        let args = AppsArgs {
            page: 0,
            page_size: None,
        };
        let page = page(&args, &ctx).expect("page should build");
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.apps.len(), 3);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let ctx = fixtures::context();
        let args = AppsArgs {
            page: 0,
            page_size: Some(0),
        };
        assert!(page(&args, &ctx).is_err());
    }
}
