/**
 * 详细中文注释 - 公共工具库（common）
 *
 * 目标
 * - 提供最小化的整数加法函数及其单元测试
 * - 演示如何把一个纯函数接入单元测试框架
 *
 * 使用注意
 * - 溢出行为继承 i32 的宿主语义，这里不做处理
 */

pub fn add(left: i32, right: i32) -> i32 {
    left + right
}
