pub use indicatif::ProgressBar;
pub use indicatif::ProgressStyle;

/// Progress over a number of sequences; the current sequence name is shown as
/// the bar message.
pub fn sequences(size: usize) -> ProgressBar {
    let progress = ProgressBar::new(size as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{wide_bar} {pos}/{len} [{elapsed} elapsed] {msg}"),
    );

    progress
}
