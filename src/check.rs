/*
 * 详细中文注释 - 自检模块（check）
 *
 * 说明
 * - 把二进制入口要跑的检查集中在这里，相当于一次最小化的测试会话
 * - run_all 把被测函数作为参数传入，单元测试里可以换一个错误实现来验证失败路径
 */

use tracing::{error, info};

// 一次自检会话的通过/失败计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub passed: u32,
    pub failed: u32,
}

impl Summary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

// 已注册的检查：名字、输入、期望值
const CHECKS: [(&str, (i32, i32), i32); 1] = [("addition", (2, 3), 5)];

// 跑完所有检查并返回计数
// 参数 add_fn: 被测的加法实现
pub fn run_all(add_fn: fn(i32, i32) -> i32) -> Summary {
    let mut summary = Summary::default();
    for (name, (a, b), expected) in CHECKS {
        let actual = add_fn(a, b);
        if actual == expected {
            info!("check {} passed: add({}, {}) = {}", name, a, b, actual);
            summary.passed += 1;
        } else {
            error!(
                "check {} failed: add({}, {}) = {}, expected {}",
                name, a, b, actual, expected
            );
            summary.failed += 1;
        }
    }
    summary
}
