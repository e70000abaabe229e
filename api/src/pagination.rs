//! Layout of the windowed page-number strip.

/// One slot in the strip between the Previous and Next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// A numbered button. `current` marks the page being shown.
    Page { number: usize, current: bool },
    /// A gap of one or more hidden pages.
    Ellipsis,
}

/// Previous/Next targets plus the numbered slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationStrip {
    pub current_page: usize,
    pub total_pages: usize,
    pub links: Vec<PageLink>,
}

impl PaginationStrip {
    /// Always shows the first and last page and the neighbours of the
    /// current page, with an ellipsis wherever pages are skipped.
    ///
    /// `current_page` is clamped to `[1, max(total_pages, 1)]`.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let total = total_pages.max(1);
        let current = current_page.clamp(1, total);
        let mut links = Vec::with_capacity(7);

        if current > 2 {
            links.push(PageLink::Page {
                number: 1,
                current: false,
            });
            if current > 3 {
                links.push(PageLink::Ellipsis);
            }
        }
        if current > 1 {
            links.push(PageLink::Page {
                number: current - 1,
                current: false,
            });
        }
        links.push(PageLink::Page {
            number: current,
            current: true,
        });
        if current < total {
            links.push(PageLink::Page {
                number: current + 1,
                current: false,
            });
        }
        if current + 1 < total {
            if current + 2 < total {
                links.push(PageLink::Ellipsis);
            }
            links.push(PageLink::Page {
                number: total,
                current: false,
            });
        }

        Self {
            current_page: current,
            total_pages: total,
            links,
        }
    }

    /// Target of the Previous button, `None` when disabled.
    pub fn previous(&self) -> Option<usize> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    /// Target of the Next button, `None` when disabled.
    pub fn next(&self) -> Option<usize> {
        (self.current_page < self.total_pages).then(|| self.current_page + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::Ellipsis;

    fn page(number: usize) -> PageLink {
        PageLink::Page {
            number,
            current: false,
        }
    }

    fn here(number: usize) -> PageLink {
        PageLink::Page {
            number,
            current: true,
        }
    }

    #[test]
    fn single_page_has_no_neighbours() {
        let strip = PaginationStrip::new(1, 1);
        assert_eq!(strip.links, vec![here(1)]);
        assert_eq!(strip.previous(), None);
        assert_eq!(strip.next(), None);
    }

    #[test]
    fn first_page_of_many() {
        let strip = PaginationStrip::new(1, 10);
        assert_eq!(strip.links, vec![here(1), page(2), Ellipsis, page(10)]);
        assert_eq!(strip.previous(), None);
        assert_eq!(strip.next(), Some(2));
    }

    #[test]
    fn middle_page_shows_both_gaps() {
        let strip = PaginationStrip::new(5, 10);
        assert_eq!(
            strip.links,
            vec![page(1), Ellipsis, page(4), here(5), page(6), Ellipsis, page(10)]
        );
        assert_eq!(strip.previous(), Some(4));
        assert_eq!(strip.next(), Some(6));
    }

    #[test]
    fn no_ellipsis_next_to_adjacent_edges() {
        assert_eq!(
            PaginationStrip::new(3, 5).links,
            vec![page(1), page(2), here(3), page(4), page(5)]
        );
        assert_eq!(
            PaginationStrip::new(2, 3).links,
            vec![page(1), here(2), page(3)]
        );
    }

    #[test]
    fn last_page_disables_next() {
        let strip = PaginationStrip::new(2, 2);
        assert_eq!(strip.links, vec![page(1), here(2)]);
        assert_eq!(strip.next(), None);
        assert_eq!(strip.previous(), Some(1));

        let strip = PaginationStrip::new(10, 10);
        assert_eq!(strip.links, vec![page(1), Ellipsis, page(9), here(10)]);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let strip = PaginationStrip::new(40, 3);
        assert_eq!(strip.current_page, 3);
        assert_eq!(strip.links, vec![page(1), page(2), here(3)]);

        let strip = PaginationStrip::new(0, 3);
        assert_eq!(strip.current_page, 1);
    }

    #[test]
    fn every_numbered_link_is_in_range() {
        for total in 1..=12 {
            for current in 1..=total {
                let strip = PaginationStrip::new(current, total);
                for link in &strip.links {
                    if let PageLink::Page { number, .. } = link {
                        assert!((1..=total).contains(number), "{current}/{total}");
                    }
                }
                let currents = strip
                    .links
                    .iter()
                    .filter(|l| matches!(l, PageLink::Page { current: true, .. }))
                    .count();
                assert_eq!(currents, 1);
            }
        }
    }
}
