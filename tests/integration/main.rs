// 統合テストのエントリポイント

mod support;
mod test_error_handling;
