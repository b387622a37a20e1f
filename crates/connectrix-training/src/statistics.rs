/// Summary of the board scores of one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreStats {
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    pub median: i64,
}

impl ScoreStats {
    /// Computes statistics from unsorted scores.
    ///
    /// Returns `None` for an empty input. The median of an even number of scores is the upper
    /// of the two middle values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use connectrix_training::statistics::ScoreStats;
    /// let stats = ScoreStats::new([5, -2, 4, 1, 3]).unwrap();
    /// assert_eq!(stats.min, -2);
    /// assert_eq!(stats.max, 5);
    /// assert_eq!(stats.mean, 2.2);
    /// assert_eq!(stats.median, 3);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut scores = scores.into_iter().collect::<Vec<_>>();
        scores.sort_unstable();

        let min = *scores.first()?;
        let max = *scores.last()?;
        let sum = scores.iter().map(|&s| s as f64).sum::<f64>();
        let mean = sum / scores.len() as f64;
        let median = scores[scores.len() / 2];

        Some(Self {
            min,
            max,
            mean,
            median,
        })
    }
}
