use clap::Args;
use std::io;
use std::path::PathBuf;
use villa_map::config::AppConfig;
use villa_map::error::AppError;
use villa_map::listings::labels::{amenity_display_label, format_price, guest_label};
use villa_map::listings::{resolve_catalog, CatalogLoader, FilterRequest, Listing, StayDates};
use villa_map::map::{Bounds, MapPresenter, PresenterOptions, RecordingSurface};

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Case-insensitive location text, e.g. "ibiza"
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Check-in date (YYYY-MM-DD); requires --checkout
    #[arg(long)]
    pub(crate) checkin: Option<String>,
    /// Check-out date (YYYY-MM-DD); requires --checkin
    #[arg(long)]
    pub(crate) checkout: Option<String>,
    /// Minimum guest capacity (defaults to 2)
    #[arg(long)]
    pub(crate) guests: Option<u16>,
    /// Maximum nightly price
    #[arg(long)]
    pub(crate) max_price: Option<u32>,
    /// Villa type; repeat to allow several
    #[arg(long)]
    pub(crate) category: Vec<String>,
    /// Required amenity; repeat to require several
    #[arg(long)]
    pub(crate) amenity: Vec<String>,
    /// Desired activity; any one of the repeated values matches
    #[arg(long)]
    pub(crate) activity: Vec<String>,
    /// CSV catalog to search instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print amenity labels and map viewport details
    #[arg(long)]
    pub(crate) details: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// CSV catalog to export instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        location,
        checkin,
        checkout,
        guests,
        max_price,
        category,
        amenity,
        activity,
        catalog,
        details,
    } = args;

    let submission = FilterRequest {
        location,
        checkin,
        checkout,
        guests,
        max_price,
        categories: category,
        amenities: amenity,
        activities: activity,
    }
    .into_submission()?;

    let (catalog, options) = load_catalog_and_options(catalog)?;
    let mut presenter = MapPresenter::new(RecordingSurface::default(), catalog, options);
    presenter.apply_filters(submission.criteria);

    render_search(&presenter, submission.stay, details);
    Ok(())
}

pub(crate) fn run_labels(tags: &[String]) {
    for tag in tags {
        println!("{tag}: {}", amenity_display_label(tag));
    }
}

pub(crate) fn run_catalog_export(args: CatalogArgs) -> Result<(), AppError> {
    let (catalog, _) = load_catalog_and_options(args.catalog)?;
    CatalogLoader::write_csv(&catalog, io::stdout().lock())?;
    Ok(())
}

fn load_catalog_and_options(
    override_path: Option<PathBuf>,
) -> Result<(Vec<Listing>, PresenterOptions), AppError> {
    let config = AppConfig::load()?;
    let path = override_path.or(config.catalog.path);
    let catalog = resolve_catalog(path.as_deref())?;
    Ok((catalog, config.map.presenter_options()))
}

fn render_search(
    presenter: &MapPresenter<RecordingSurface>,
    stay: Option<StayDates>,
    details: bool,
) {
    println!("Villa search");
    match stay {
        Some(stay) => println!(
            "Stay: {} -> {} ({} nights)",
            stay.check_in,
            stay.check_out,
            stay.nights()
        ),
        None => println!("Stay: any dates"),
    }
    println!("{}", presenter.results_label());

    for listing in presenter.filtered() {
        println!(
            "- #{} {} | {} | {}/night | {} | {}",
            listing.id,
            listing.name,
            listing.location,
            format_price(listing.price),
            guest_label(listing.guests),
            listing.category.label()
        );
        if details {
            let amenities: Vec<String> = listing
                .amenities
                .iter()
                .map(|tag| amenity_display_label(tag).to_string())
                .collect();
            println!("    {}", amenities.join(", "));
        }
    }

    if details {
        let bounds =
            Bounds::from_coordinates(presenter.bindings().iter().map(|binding| binding.coordinate));
        match bounds {
            Some(bounds) => println!(
                "\nMap: {} markers, viewport ({:.4}, {:.4}) to ({:.4}, {:.4})",
                presenter.surface().live_count(),
                bounds.south_west.lng,
                bounds.south_west.lat,
                bounds.north_east.lng,
                bounds.north_east.lat
            ),
            None => println!("\nMap: no markers"),
        }
    }
}
