mod compare_granularity;
mod exit_status;
mod normalization;
