use agrocat::config::ColorChoice;
use agrocat::model::{CatalogKind, ViewMode};
use agrocat::schema::SortKey;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "agrocat",
    bin_name = "agrocat",
    version,
    disable_help_subcommand = true,
    after_help = "Catalogs: programs, courses, products, news\nSee the filters of a catalog with: agrocat filters <catalog>"
)]
#[command(about = "Browse the catalogs of an agricultural training cooperative", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// When to use colors: auto, always or never
    #[arg(long, global = true, value_name = "WHEN", help_heading = "Options")]
    pub color: Option<ColorChoice>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a catalog with filters, search, sort and pagination
    #[command(alias = "ls", display_order = 1)]
    List {
        /// programs, courses, products or news
        catalog: CatalogKind,

        /// Search in titles and descriptions (also instructor, producer or location)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Filter as key=value (repeatable, e.g. -f level=Débutant -f price=free)
        #[arg(short, long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,

        /// recent, popular, trending, price-asc, price-desc or rating
        #[arg(long)]
        sort: Option<SortKey>,

        /// Page number, starting at 1
        #[arg(short, long)]
        page: Option<usize>,

        /// grid or list
        #[arg(long)]
        view: Option<ViewMode>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one item of a catalog
    #[command(alias = "s", display_order = 2)]
    Show {
        /// programs, courses, products or news
        catalog: CatalogKind,

        /// Item id
        id: String,

        /// Print the item as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the filter keys, option counts and sorts of a catalog
    #[command(alias = "facets", display_order = 3)]
    Filters {
        /// programs, courses, products or news
        catalog: CatalogKind,

        /// Print the facets as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (e.g. default_view, page_size.courses.grid)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn list_with_everything() {
        let cli = parse(&[
            "agrocat",
            "list",
            "courses",
            "-s",
            "irrigation",
            "-f",
            "level=Débutant",
            "--filter",
            "price=free",
            "--sort",
            "price-asc",
            "-p",
            "2",
            "--view",
            "list",
            "--json",
        ]);
        match cli.command {
            Commands::List {
                catalog,
                search,
                filters,
                sort,
                page,
                view,
                json,
            } => {
                assert_eq!(catalog, CatalogKind::Courses);
                assert_eq!(search, "irrigation");
                assert_eq!(filters, vec!["level=Débutant", "price=free"]);
                assert_eq!(sort, Some(SortKey::PriceAsc));
                assert_eq!(page, Some(2));
                assert_eq!(view, Some(ViewMode::List));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn list_defaults() {
        let cli = parse(&["agrocat", "ls", "news"]);
        match cli.command {
            Commands::List {
                catalog,
                search,
                filters,
                sort,
                page,
                view,
                json,
            } => {
                assert_eq!(catalog, CatalogKind::News);
                assert!(search.is_empty());
                assert!(filters.is_empty());
                assert!(sort.is_none() && page.is_none() && view.is_none());
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn search_help_names_searched_fields() {
        let mut cmd = Cli::command();
        let help = cmd
            .find_subcommand_mut("list")
            .unwrap()
            .render_help()
            .to_string();
        assert!(help.contains("Search in titles and descriptions"));
        assert!(!help.contains("tags"));
    }

    #[test]
    fn unknown_catalog_is_rejected() {
        assert!(Cli::try_parse_from(["agrocat", "list", "events"]).is_err());
    }

    #[test]
    fn unknown_sort_is_rejected() {
        assert!(Cli::try_parse_from(["agrocat", "list", "courses", "--sort", "cheapest"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["agrocat", "show", "products", "prd-miel", "-v", "--color", "never"]);
        assert!(cli.verbose);
        assert_eq!(cli.color, Some(ColorChoice::Never));
        assert!(matches!(cli.command, Commands::Show { ref id, .. } if id == "prd-miel"));
    }

    #[test]
    fn filters_alias() {
        let cli = parse(&["agrocat", "facets", "programs"]);
        assert!(matches!(
            cli.command,
            Commands::Filters {
                catalog: CatalogKind::Programs,
                json: false
            }
        ));
    }

    #[test]
    fn config_arguments_are_optional() {
        let cli = parse(&["agrocat", "config"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                key: None,
                value: None
            }
        ));
        let cli = parse(&["agrocat", "config", "default_view", "list"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                key: Some(ref k),
                value: Some(ref v)
            } if k == "default_view" && v == "list"
        ));
    }
}
