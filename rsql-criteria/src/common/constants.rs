// keyword defaults
pub const WHERE_KEYWORD: &str = "$where";
pub const ORDER_BY_KEYWORD: &str = "$orderBy";
pub const PAGE_SIZE_KEYWORD: &str = "$pageSize";
pub const INCLUDE_TOTAL_COUNT_KEYWORD: &str = "$includeTotalCount";
pub const PAGE_NUMBER_KEYWORD: &str = "$pageNumber";

// rendering constants
pub const SECTION_SEPARATOR: &str = "&";
pub const ORDER_BY_SEPARATOR: &str = ", ";
pub const ARRAY_SEPARATOR: &str = ",";
pub const NULL_LITERAL: &str = "null";
