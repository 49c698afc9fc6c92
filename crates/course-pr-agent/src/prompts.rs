//! Prompts guiding a model through CI/CD and PR review workflows.

use course_mcp::{PromptDef, PromptFuture, PromptRegistry};
use serde_json::{Map, Value};

const ANALYZE_CI_RESULTS: &str = r#"Please analyze the recent CI/CD results from GitHub Actions:
1. First, call get_recent_actions_events() to fetch the latest CI/CD events
2. Then call get_workflow_status() to check current workflow states
3. Identify any failures or issues that need attention
4. Provide actionable next steps based on the results

Format your response as:
## CI/CD Status Summary
- **Overall Health**: [Good/Warning/Critical]
- **Failed Workflows**: [List any failures with links]
- **Successful Workflows**: [List recent successes]
- **Recommendations**: [Specific actions to take]
- **Trends**: [Any patterns you notice]"#;

const CREATE_DEPLOYMENT_SUMMARY: &str = r#"Create a deployment summary for team communication:
1. Check workflow status with get_workflow_status()
2. Look specifically for deployment-related workflows
3. Note the deployment outcome, timing, and any issues

Format as a concise message suitable for Slack:
🚀 **Deployment Update**
- **Status**: [✅ Success / ❌ Failed / ⏳ In Progress]
- **Environment**: [Production/Staging/Dev]
- **Version/Commit**: [If available from workflow data]
- **Duration**: [If available]
- **Key Changes**: [Brief summary if available]
- **Issues**: [Any problems encountered]
- **Next Steps**: [Required actions if failed]

Keep it brief but informative for team awareness."#;

const GENERATE_PR_STATUS_REPORT: &str = r#"Generate a comprehensive PR status report:
1. Use analyze_file_changes() to understand what changed
2. Use get_workflow_status() to check CI/CD status
3. Use suggest_pr_template() to recommend the appropriate PR template
4. Combine all information into a cohesive report

Your report must follow this Markdown format:
## 📋 PR Status Report

### 📝 Code Changes
- **Files Modified**: [Count of files by extension, e.g., 5 .rs, 2 .yml]
- **Change Type**: [Infer one: Feature, Bug Fix, Refactor, Chore, Docs, Testing]
- **Impact Assessment**: [High, Medium, or Low, with a brief justification]
- **Key Changes**:
    - [Bulleted list summarizing the most important modifications]

### 🔄 CI/CD Status
- **All Checks**: [Provide a single status: ✅ Passing, ❌ Failing, or ⏳ Running]
- **Test Results**: [Summarize test outcomes, e.g., "152/152 passed" or "148/152 passed, 4 failed". List failed tests if applicable.]
- **Build Status**: [Summarize build outcome, e.g., "Build successful" or "Build failed on step 'X'."]
- **Code Quality**: [Report on linting, code coverage, or other quality gates if data is available.]

### 📌 Recommendations
- **PR Template**: [Suggest the most appropriate PR template type (e.g., Feature, Bug Fix) and explain why.]
- **Next Steps**: [List clear, actionable steps required for this PR to be merged, e.g., "Address failing tests," "Request review from the backend team."]
- **Reviewers**: [Suggest 2-3 potential reviewers based on the files and code changed.]

### ⚠️ Risks & Considerations
- [Identify any potential deployment risks, performance impacts, or security concerns.]
- [Explicitly state if there are any breaking changes.]
- [Mention any important dependencies that are added, removed, or updated.]"#;

const TROUBLESHOOT_WORKFLOW_FAILURE: &str = r#"Help troubleshoot failing GitHub Actions workflows:
1. Use get_recent_actions_events() to find recent failures
2. Use get_workflow_status() to see which workflows are failing
3. Analyze the failure patterns and timing
4. Provide systematic troubleshooting steps

Structure your response as:

## 🔧 Workflow Troubleshooting Guide

### ❌ Failed Workflow Details
- **Workflow Name**: [Name of failing workflow]
- **Failure Type**: [Test/Build/Deploy/Lint]
- **First Failed**: [When did it start failing]
- **Failure Rate**: [Intermittent or consistent]

### 🔍 Diagnostic Information
- **Error Patterns**: [Common error messages or symptoms]
- **Recent Changes**: [What changed before failures started]
- **Dependencies**: [External services or resources involved]

### 💡 Possible Causes (ordered by likelihood)
1. **[Most Likely]**: [Description and why]
2. **[Likely]**: [Description and why]
3. **[Possible]**: [Description and why]

### ✅ Suggested Fixes
**Immediate Actions:**
- [ ] [Quick fix to try first]
- [ ] [Second quick fix]

**Investigation Steps:**
- [ ] [How to gather more info]
- [ ] [Logs or data to check]

**Long-term Solutions:**
- [ ] [Preventive measure]
- [ ] [Process improvement]

### 📚 Resources
- [Relevant documentation links]
- [Similar issues or solutions]"#;

/// (name, description, text) of every prompt.
const PROMPTS: &[(&str, &str, &str)] = &[
    (
        "analyze_ci_results",
        "Analyze recent CI/CD results and provide insights",
        ANALYZE_CI_RESULTS,
    ),
    (
        "create_deployment_summary",
        "Generate a deployment summary for team communication",
        CREATE_DEPLOYMENT_SUMMARY,
    ),
    (
        "generate_pr_status_report",
        "Generate a comprehensive PR status report including CI/CD results",
        GENERATE_PR_STATUS_REPORT,
    ),
    (
        "troubleshoot_workflow_failure",
        "Help troubleshoot a failing GitHub Actions workflow",
        TROUBLESHOOT_WORKFLOW_FAILURE,
    ),
];

/// The PR agent's argument-free prompts.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrAgentPrompts;

impl PromptRegistry for PrAgentPrompts {
    fn prompts(&self) -> Vec<PromptDef> {
        PROMPTS
            .iter()
            .map(|(name, description, _)| PromptDef::new(*name, *description))
            .collect()
    }

    fn get(&self, name: &str, _args: Map<String, Value>) -> Option<PromptFuture> {
        let (_, _, text) = PROMPTS.iter().find(|(n, _, _)| *n == name)?;
        let text = (*text).to_string();
        Some(Box::pin(async move { Ok(text) }))
    }
}
