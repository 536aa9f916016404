use std::fmt::{self, Write as _};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use moviedeck::display::{
    format_currency, format_rating, format_runtime, results_summary, summary_line,
    top_cast, TOP_CAST,
};
use moviedeck::filters::genre_label;
use moviedeck::models::MovieDetail;
use moviedeck::{
    AppStore, CatalogClient, CatalogConfig, DetailState, FilterUpdate, ImageKind, ListState, SortBy,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "moviedeck", about = "Browse the movie catalog from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Browse movies by genre, year and sort order
    Discover {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Genre id, e.g. 28 for Action
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        year: Option<String>,
        #[arg(long, default_value_t = SortBy::PopularityDesc)]
        sort: SortBy,
    },
    /// Search movies by title
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show one movie with cast and trailer
    Movie { id: i64 },
    /// List the catalog's genres
    Genres,
}

// Each command renders the resulting slice or returns its error message
async fn discover(
    store: &AppStore,
    page: u32,
    genre: Option<String>,
    year: Option<String>,
    sort: SortBy,
) -> Result<String, String> {
    if let Some(genre) = genre {
        store.set_filter(FilterUpdate::Genre(genre)).await;
    }
    if let Some(year) = year {
        store.set_filter(FilterUpdate::Year(year)).await;
    }
    store.set_filter(FilterUpdate::SortBy(sort)).await;
    store.change_page(page).await;

    let list = store.list().await;
    if let Some(error) = list.error {
        return Err(error);
    }
    let mut out = format!("Sorted by {}\n", sort.label());
    write_list(&mut out, &list).map_err(|e| e.to_string())?;
    Ok(out)
}

async fn search(store: &AppStore, query: &str, page: u32) -> Result<String, String> {
    store.request_search(query, page).await;

    let list = store.list().await;
    if let Some(error) = list.error {
        return Err(error);
    }
    let mut out = String::new();
    write_list(&mut out, &list).map_err(|e| e.to_string())?;
    Ok(out)
}

fn write_list(out: &mut String, list: &ListState) -> fmt::Result {
    writeln!(out, "{}", results_summary(list.total_results, &list.search_query))?;
    for movie in &list.movies {
        writeln!(out, "  [{}] {}", movie.id, summary_line(movie))?;
    }

    let window = list.page_window();
    if window.is_hidden() {
        return Ok(());
    }
    let pages: Vec<String> = window
        .pages()
        .map(|p| if p == window.current { format!("[{p}]") } else { p.to_string() })
        .collect();
    write!(out, "Page {} of {}:", window.current, window.total)?;
    if window.shows_first() {
        write!(out, " 1{}", if window.leading_ellipsis() { " ..." } else { "" })?;
    }
    write!(out, " {}", pages.join(" "))?;
    if window.shows_last() {
        write!(out, "{} {}", if window.trailing_ellipsis() { " ..." } else { "" }, window.total)?;
    }
    writeln!(out)
}

async fn movie(store: &AppStore, client: &CatalogClient, id: i64) -> Result<String, String> {
    store.request_detail(id).await;
    let state = store.detail().await;
    if let Some(error) = state.error.clone() {
        return Err(error);
    }
    let detail = state
        .movie_detail
        .as_ref()
        .ok_or_else(|| format!("Movie {id} not found"))?;

    let mut out = String::new();
    write_movie(&mut out, client, &state, detail).map_err(|e| e.to_string())?;
    Ok(out)
}

fn write_movie(
    out: &mut String,
    client: &CatalogClient,
    state: &DetailState,
    detail: &MovieDetail,
) -> fmt::Result {
    writeln!(out, "{}", summary_line(detail))?;
    if let Some(tagline) = detail.tagline.as_deref().filter(|t| !t.is_empty()) {
        writeln!(out, "  \"{tagline}\"")?;
    }
    let genres: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
    writeln!(
        out,
        "  ★ {} ({} votes) | {} | {}",
        format_rating(detail.vote_average),
        detail.vote_count,
        format_runtime(detail.runtime),
        genres.join(", ")
    )?;
    writeln!(
        out,
        "  Budget {} | Revenue {} | {}",
        format_currency(detail.budget),
        format_currency(detail.revenue),
        detail.status
    )?;
    writeln!(out, "  Poster: {}", client.image_url(detail.poster_path.as_deref(), "w500", ImageKind::Poster))?;
    writeln!(out, "  Backdrop: {}", client.image_url(detail.backdrop_path.as_deref(), "w1280", ImageKind::Backdrop))?;
    if let Some(trailer) = state.trailer() {
        writeln!(out, "  Trailer: {}", trailer.youtube_url())?;
    }
    if !detail.overview.is_empty() {
        writeln!(out, "\n{}", detail.overview)?;
    }

    let cast = top_cast(&state.cast, TOP_CAST);
    if !cast.is_empty() {
        writeln!(out, "\nCast:")?;
        for member in cast {
            writeln!(out, "  {} as {}", member.name, member.character)?;
        }
    }
    Ok(())
}

async fn genres(store: &AppStore) -> Result<String, String> {
    let genres = store.api().list_genres().await.map_err(|e| e.to_string())?;
    let mut out = String::new();
    for genre in genres {
        let known = genre_label(&genre.id.to_string()).is_some();
        out.push_str(&format!(
            "{:>6}  {}{}\n",
            genre.id,
            genre.name,
            if known { "" } else { " (no picker entry)" }
        ));
    }
    Ok(out)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moviedeck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = match CatalogConfig::from_env().and_then(CatalogClient::new) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!(error = %e, "Could not set up the catalog client");
            return ExitCode::FAILURE;
        }
    };
    let store = AppStore::new(client.clone());

    let result = match cli.command {
        Command::Discover { page, genre, year, sort } => discover(&store, page, genre, year, sort).await,
        Command::Search { query, page } => search(&store, &query, page).await,
        Command::Movie { id } => movie(&store, &client, id).await,
        Command::Genres => genres(&store).await,
    };

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
