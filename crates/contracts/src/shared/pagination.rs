use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Pedido de página. `page` começa em 0 na interface; a API recebe `page + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size: page_size.max(1),
        }
    }

    /// Número da página (a partir de 1) enviado em `page=`.
    pub fn wire_page(&self) -> usize {
        self.page + 1
    }

    pub fn first(&self) -> Self {
        Self::new(0, self.page_size)
    }
}

/// Quantidade de páginas para `total` registros. O total vem do servidor, por
/// isso a conta é feita em `u64` e satura ao converter.
pub fn total_pages(total: u64, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    usize::try_from(total.div_ceil(page_size as u64)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_total_pages_huge_total() {
        let pages = total_pages(u64::MAX, 20);
        assert!(pages > 0);
        assert_eq!(total_pages(u64::MAX, 1), usize::MAX);
    }

    #[test]
    fn test_wire_page_is_one_based() {
        let req = PageRequest::new(2, 0);
        assert_eq!(req.wire_page(), 3);
        assert_eq!(req.page_size, 1);
        assert_eq!(req.first().page, 0);
    }
}
