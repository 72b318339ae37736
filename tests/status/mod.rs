mod print_empty_sections_for_clean_repository;
mod report_every_kind_of_change;
