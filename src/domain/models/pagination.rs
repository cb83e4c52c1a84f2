//! 페이지네이션 모델
//!
//! 목록 조회 요청의 쿼리 문자열을 [`PaginationQuery`]로 정규화하고,
//! 전체 항목 수를 바탕으로 [`PaginationResponse`] (페이지 링크 포함)를 계산합니다.
//!
//! ```rust,ignore
//! let query = PaginationQuery::new(2, 10, "created_at", SortOrder::Descend, "/api/v1/posts");
//! assert_eq!(query.skip, 10);
//!
//! let response = query.paginate(35)?;
//! assert_eq!(response.total_pages, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::domain::{notification, DomainError, PaginationError};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_ITEMS_PER_PAGE: u64 = 100;
pub const DEFAULT_ORDER_BY: &str = "created_at";
/// 페이지 링크 창 크기
pub const DEFAULT_AMOUNT_OF_PAGES: u64 = 10;

/// 정렬 방향
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascend,
    #[default]
    Descend,
}

impl SortOrder {
    /// 알 수 없는 값은 기본값(`descend`)으로 처리합니다.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "ascend" | "asc" => SortOrder::Ascend,
            _ => SortOrder::Descend,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascend => "ascend",
            SortOrder::Descend => "descend",
        }
    }

    /// MongoDB 정렬 문서에 쓰이는 값
    pub fn direction(&self) -> i32 {
        match self {
            SortOrder::Ascend => 1,
            SortOrder::Descend => -1,
        }
    }
}

/// 쿼리 문자열 원본 값 (`?page=..&limit=..&order_by=..&sort_order=..`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub order_by: Option<String>,
    pub sort_order: Option<String>,
}

/// 정규화된 페이지네이션 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationQuery {
    pub page: u64,
    pub limit: u64,
    pub order_by: String,
    pub sort_order: SortOrder,
    pub skip: u64,
    pub base_url: String,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT, DEFAULT_ORDER_BY, SortOrder::default(), "")
    }
}

impl PaginationQuery {
    pub fn new(
        page: u64,
        limit: u64,
        order_by: impl Into<String>,
        sort_order: SortOrder,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            page,
            limit,
            order_by: order_by.into(),
            sort_order,
            skip: calculate_skip(page, limit),
            base_url: base_url.into(),
        }
    }

    /// 쿼리 문자열 값을 해석합니다. 잘못된 값은 기본값으로 대체됩니다.
    pub fn from_params(params: &PaginationParams, base_url: impl Into<String>) -> Self {
        let page = parse_page(params.page.as_deref());
        let limit = parse_limit(params.limit.as_deref());
        let order_by = params
            .order_by
            .as_deref()
            .map(str::trim)
            .filter(|field| is_field_name(field))
            .unwrap_or(DEFAULT_ORDER_BY);
        let sort_order = params
            .sort_order
            .as_deref()
            .map(SortOrder::from_name)
            .unwrap_or_default();

        Self::new(page, limit, order_by, sort_order, base_url)
    }

    /// 전체 항목 수로 응답 메타데이터를 계산합니다.
    ///
    /// # Errors
    ///
    /// 항목이 존재하는데 요청한 페이지가 마지막 페이지를 넘으면 [`PaginationError`].
    pub fn paginate(&self, total_items: u64) -> Result<PaginationResponse, DomainError> {
        let total_pages = calculate_total_pages(total_items, self.limit);
        if total_items > 0 && self.page > total_pages {
            return Err(PaginationError::new(
                self.page,
                total_pages,
                notification::PAGINATION_ERROR_NOTIFICATION,
            )
            .into());
        }

        Ok(PaginationResponse::new(self, total_items))
    }
}

/// 목록 응답에 포함되는 페이지 정보
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaginationResponse {
    pub page: u64,
    pub total_pages: u64,
    pub pages_left: u64,
    pub total_items: u64,
    pub items_left: u64,
    pub limit: u64,
    pub order_by: String,
    pub sort_order: SortOrder,
    pub page_links: Vec<String>,
}

impl PaginationResponse {
    pub fn new(query: &PaginationQuery, total_items: u64) -> Self {
        let total_pages = calculate_total_pages(total_items, query.limit);
        let mut response = Self {
            page: query.page,
            total_pages,
            pages_left: total_pages.saturating_sub(query.page),
            total_items,
            items_left: total_items.saturating_sub(query.page.saturating_mul(query.limit)),
            limit: query.limit,
            order_by: query.order_by.clone(),
            sort_order: query.sort_order,
            page_links: Vec::new(),
        };
        response.page_links = generate_page_links(&response, &query.base_url, DEFAULT_AMOUNT_OF_PAGES);
        response
    }
}

fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(DEFAULT_PAGE)
}

fn parse_limit(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|limit| (1..=MAX_ITEMS_PER_PAGE).contains(limit))
        .unwrap_or(DEFAULT_LIMIT)
}

fn is_field_name(field: &str) -> bool {
    !field.is_empty() && field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// 클라이언트가 보낸 페이지 값은 상한이 없으므로 곱셈은 포화시킵니다.
fn calculate_skip(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit)
}

fn calculate_total_pages(total_items: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_items.div_ceil(limit)
}

/// 현재 페이지를 중심으로 한 창(window)의 링크를 만듭니다. 현재 페이지는 제외합니다.
fn generate_page_links(response: &PaginationResponse, base_url: &str, amount_of_pages: u64) -> Vec<String> {
    let mut links = Vec::with_capacity(amount_of_pages as usize + 2);
    if response.total_pages == 0 {
        return links;
    }

    let mut start_page = response.page.saturating_sub(amount_of_pages / 2).max(1);
    if start_page != 1 {
        links.push(build_page_link(response, base_url, 1));
    }

    let mut end_page = start_page.saturating_add(amount_of_pages);
    if end_page > response.total_pages {
        end_page = response.total_pages;
        start_page = end_page.saturating_sub(amount_of_pages).max(1);
    }

    for page in start_page..=end_page {
        if page != response.page {
            links.push(build_page_link(response, base_url, page));
        }
    }

    if end_page != response.total_pages {
        links.push(build_page_link(response, base_url, response.total_pages));
    }

    links
}

fn build_page_link(response: &PaginationResponse, base_url: &str, page: u64) -> String {
    format!(
        "{}?page={}&limit={}&order_by={}&sort_order={}",
        base_url,
        page,
        response.limit,
        response.order_by,
        response.sort_order.as_str()
    )
}
