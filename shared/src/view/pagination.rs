use std::ops::Range;

use crate::labels;

/// One entry of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { target: usize, disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

impl PageControl {
    /// Page to switch to when the control is activated
    pub fn target(&self) -> Option<usize> {
        match *self {
            PageControl::Previous { target, disabled } | PageControl::Next { target, disabled } => {
                (!disabled).then_some(target)
            }
            PageControl::Page { number, .. } => Some(number),
            PageControl::Ellipsis => None,
        }
    }
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Half-open index range of `page` (1-based) within a list of `len` items
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// Clamps a requested page into `[1, total]`; an empty list stays on page 1
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Builds the strip: prev, optional first page and ellipsis, the current page
/// with its neighbours, optional ellipsis and last page, next.
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    if total == 0 {
        return Vec::new();
    }
    let current = clamp_page(current, total);
    let mut controls = Vec::with_capacity(9);

    controls.push(PageControl::Previous {
        target: current.saturating_sub(1).max(1),
        disabled: current == 1,
    });

    if current > 2 {
        controls.push(PageControl::Page { number: 1, active: false });
        if current > 3 {
            controls.push(PageControl::Ellipsis);
        }
    }

    if current > 1 {
        controls.push(PageControl::Page { number: current - 1, active: false });
    }

    controls.push(PageControl::Page { number: current, active: true });

    if current < total {
        controls.push(PageControl::Page { number: current + 1, active: false });
    }

    if current + 2 < total {
        controls.push(PageControl::Ellipsis);
    }
    if current + 1 < total {
        controls.push(PageControl::Page { number: total, active: false });
    }

    controls.push(PageControl::Next {
        target: (current + 1).min(total),
        disabled: current == total,
    });

    controls
}

/// "Mostrando 11-20 de 23 juegos", with a suffix naming the unfiltered size
/// while a search is active
pub fn pagination_info(page: usize, page_size: usize, len: usize, filtered_from: Option<usize>) -> String {
    let bounds = page_bounds(page, page_size, len);
    if bounds.is_empty() {
        return labels::NOTHING_TO_SHOW.to_string();
    }

    let mut info = format!("Mostrando {}-{} de {} juegos", bounds.start + 1, bounds.end, len);
    if let Some(total) = filtered_from {
        info.push_str(&format!(" (filtrados de {})", total));
    }
    info
}
