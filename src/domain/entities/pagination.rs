#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub number: u64,
    pub visible: bool,
    pub active: bool,
}

/// Navigation state derived from the current page and the reported total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub show_previous: bool,
    pub show_next: bool,
    pub links: Vec<PageLink>,
}

impl PageInfo {
    pub fn compute(current_page: u64, total_items: u64, page_size: u64, link_count: u64) -> Self {
        let total_pages = total_items.div_ceil(page_size.max(1));
        let first = first_link(current_page, total_pages, link_count);
        let links = (first..first + link_count)
            .map(|number| PageLink {
                number,
                visible: number <= total_pages,
                active: number == current_page,
            })
            .collect();

        Self {
            current_page,
            total_items,
            total_pages,
            show_previous: current_page > 1,
            show_next: current_page < total_pages,
            links,
        }
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

/// First numbered link of a window of `link_count` links kept around the
/// current page and inside `1..=total_pages`.
fn first_link(current_page: u64, total_pages: u64, link_count: u64) -> u64 {
    if total_pages <= link_count {
        return 1;
    }
    let last_start = total_pages - link_count + 1;
    current_page
        .saturating_sub(link_count / 2)
        .clamp(1, last_start)
}

impl Default for PageInfo {
    fn default() -> Self {
        PageInfo::compute(1, 0, 1, 0)
    }
}
